use std::{borrow::Cow, fmt::Display};

use itertools::Itertools;

use super::{base_type::BaseType, identifier::Identifier};

/// The type of a field, a parameter, a local variable, or a return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum JavaTypeSignature {
    /// A primitive type.
    #[display("{_0}")]
    Base(BaseType),
    /// A reference type.
    #[display("{_0}")]
    Reference(ReferenceTypeSignature),
}

/// A reference type, i.e., a class type, an array type, or a type variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ReferenceTypeSignature {
    /// A class or interface type, e.g., `Ljava/util/List<TE;>;`.
    #[display("{_0}")]
    Class(ClassTypeSignature),
    /// An array type, e.g., `[TT;`.
    #[display("{_0}")]
    Array(ArrayTypeSignature),
    /// A type variable, e.g., `TT;`.
    #[display("{_0}")]
    TypeVariable(TypeVariableSignature),
}

impl From<ClassTypeSignature> for JavaTypeSignature {
    fn from(value: ClassTypeSignature) -> Self {
        Self::Reference(value.into())
    }
}

impl From<ArrayTypeSignature> for JavaTypeSignature {
    fn from(value: ArrayTypeSignature) -> Self {
        Self::Reference(value.into())
    }
}

impl From<TypeVariableSignature> for JavaTypeSignature {
    fn from(value: TypeVariableSignature) -> Self {
        Self::Reference(value.into())
    }
}

/// A class or interface type.
///
/// The binary name only names the outermost class. The type arguments of the outermost class
/// and the nested classes selected with `.` are kept separately.
/// For example, `Ljava/util/Map<TK;TV;>.Entry<TK;TV;>;` has the binary name `java/util/Map`,
/// two type arguments, and one nested class `Entry` with its own two type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassTypeSignature {
    /// The binary name of the outermost class, e.g., `java/util/Map`.
    pub binary_name: String,
    /// The type arguments of the outermost class.
    pub type_arguments: Vec<TypeArgument>,
    /// The nested classes, from the outermost to the innermost.
    pub inner_types: Vec<SimpleClassTypeSignature>,
}

impl ClassTypeSignature {
    /// The binary name of `java.lang.Object`.
    pub const OBJECT_BINARY_NAME: &'static str = "java/lang/Object";

    /// Creates a non-generic class type.
    #[must_use]
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        Self {
            binary_name: binary_name.into(),
            type_arguments: Vec::new(),
            inner_types: Vec::new(),
        }
    }

    /// Creates the type `java.lang.Object`.
    #[must_use]
    pub fn object() -> Self {
        Self::new(Self::OBJECT_BINARY_NAME)
    }

    /// Returns the package part of the binary name including the trailing `/`,
    /// or an empty string for a class in the default package.
    #[must_use]
    pub fn package_specifier(&self) -> &str {
        self.binary_name
            .rfind('/')
            .map_or("", |index| &self.binary_name[..=index])
    }

    /// Returns the simple name of the outermost class.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.binary_name[self.package_specifier().len()..]
    }

    /// Returns the binary name of the class denoted by the whole signature.
    /// Nested classes are joined with `$`, e.g., `java/util/Map$Entry`.
    #[must_use]
    pub fn erased_binary_name(&self) -> Cow<'_, str> {
        if self.inner_types.is_empty() {
            Cow::Borrowed(&self.binary_name)
        } else {
            let inner_names = self.inner_types.iter().map(|it| &it.identifier).join("$");
            Cow::Owned(format!("{}${inner_names}", self.binary_name))
        }
    }

    /// Checks whether this is `java.lang.Object` without type arguments.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.binary_name == Self::OBJECT_BINARY_NAME
            && self.type_arguments.is_empty()
            && self.inner_types.is_empty()
    }
}

impl Display for ClassTypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.binary_name)?;
        write_type_arguments(f, &self.type_arguments)?;
        for inner in &self.inner_types {
            write!(f, ".{inner}")?;
        }
        write!(f, ";")
    }
}

/// A nested class selected from an enclosing class type, with its own type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleClassTypeSignature {
    /// The simple name of the nested class.
    pub identifier: Identifier,
    /// The type arguments.
    pub type_arguments: Vec<TypeArgument>,
}

impl Display for SimpleClassTypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)?;
        write_type_arguments(f, &self.type_arguments)
    }
}

fn write_type_arguments(
    f: &mut std::fmt::Formatter<'_>,
    type_arguments: &[TypeArgument],
) -> std::fmt::Result {
    if type_arguments.is_empty() {
        Ok(())
    } else {
        write!(f, "<{}>", type_arguments.iter().format(""))
    }
}

/// Indicates how a [`TypeArgument`] relates to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildcardIndicator {
    /// The type itself, e.g., `List<String>`.
    Exact,
    /// An upper bounded wildcard, e.g., `List<? extends Number>`.
    Extends,
    /// A lower bounded wildcard, e.g., `List<? super Integer>`.
    Super,
    /// An unbounded wildcard, e.g., `List<?>`.
    Wild,
}

/// A type argument of a generic class type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TypeArgument {
    /// A type argument without wildcard.
    #[display("{_0}")]
    Exact(ReferenceTypeSignature),
    /// `? extends` the given type.
    #[display("+{_0}")]
    Extends(ReferenceTypeSignature),
    /// `? super` the given type.
    #[display("-{_0}")]
    Super(ReferenceTypeSignature),
    /// `?`
    #[display("*")]
    Wild,
}

impl TypeArgument {
    /// Returns the wildcard indicator of the argument.
    #[must_use]
    pub const fn wildcard(&self) -> WildcardIndicator {
        match self {
            Self::Exact(_) => WildcardIndicator::Exact,
            Self::Extends(_) => WildcardIndicator::Extends,
            Self::Super(_) => WildcardIndicator::Super,
            Self::Wild => WildcardIndicator::Wild,
        }
    }

    /// Returns the type of the argument, or [`None`] for an unbounded wildcard.
    #[must_use]
    pub const fn reference_type(&self) -> Option<&ReferenceTypeSignature> {
        match self {
            Self::Exact(it) | Self::Extends(it) | Self::Super(it) => Some(it),
            Self::Wild => None,
        }
    }
}

/// An array type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayTypeSignature {
    /// The type of the elements of the array.
    pub component: Box<JavaTypeSignature>,
}

impl ArrayTypeSignature {
    /// The maximum number of dimensions of an array type in a class file.
    pub const MAX_DIMENSIONS: usize = 255;

    /// Creates a one-dimensional array of `component`.
    #[must_use]
    pub fn new<T: Into<JavaTypeSignature>>(component: T) -> Self {
        Self {
            component: Box::new(component.into()),
        }
    }

    /// Creates an array of `component` with the given number of dimensions.
    /// # Panics
    /// Panics if `dimensions` is zero.
    #[must_use]
    pub fn with_dimensions<T: Into<JavaTypeSignature>>(component: T, dimensions: usize) -> Self {
        assert!(dimensions > 0, "an array has at least one dimension");
        let mut array = Self::new(component);
        for _ in 1..dimensions {
            array = Self::new(array);
        }
        array
    }

    /// Strips all array layers and returns the innermost non-array component together with
    /// the number of dimensions.
    #[must_use]
    pub fn innermost_component(&self) -> (&JavaTypeSignature, usize) {
        let mut dimensions = 1;
        let mut component = self.component.as_ref();
        while let JavaTypeSignature::Reference(ReferenceTypeSignature::Array(inner)) = component
        {
            dimensions += 1;
            component = inner.component.as_ref();
        }
        (component, dimensions)
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.innermost_component().1
    }
}

impl Display for ArrayTypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (component, dimensions) = self.innermost_component();
        write!(f, "{}{component}", "[".repeat(dimensions))
    }
}

/// A reference to a type variable.
/// The bounds are declared by the [`TypeParameter`](super::TypeParameter) of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("T{identifier};")]
pub struct TypeVariableSignature {
    /// The name of the type variable.
    pub identifier: Identifier,
}

impl TypeVariableSignature {
    /// Creates a reference to the type variable `identifier`.
    pub fn new<I: Into<Identifier>>(identifier: I) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}
