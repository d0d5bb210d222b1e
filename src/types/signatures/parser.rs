//! Recursive-descent parsing of signatures.
//!
//! Every production has a `parse` function that consumes exactly that production from a
//! [`Cursor`]. The next unread character always decides which production applies, so the
//! parser never backtracks.

use std::str::FromStr;

use super::{
    base_type::BaseType,
    cursor::Cursor,
    declarations::{
        ClassSignature, FieldSignature, MethodSignature, ReturnType, ThrowsSignature,
        TypeParameter,
    },
    errors::{MalformedSignature, MalformedSignatureKind},
    reference_type::{
        ArrayTypeSignature, ClassTypeSignature, JavaTypeSignature, ReferenceTypeSignature,
        SimpleClassTypeSignature, TypeArgument, TypeVariableSignature,
    },
};

/// Parses the whole `input` with `parse`, failing if anything is left over.
fn parse_complete<T, F>(input: &str, parse: F) -> Result<T, MalformedSignature>
where
    F: FnOnce(&mut Cursor<'_>) -> Result<T, MalformedSignature>,
{
    let mut cursor = Cursor::new(input);
    parse(&mut cursor)
        .and_then(|it| {
            if cursor.is_empty() {
                Ok(it)
            } else {
                Err(cursor.error(MalformedSignatureKind::TrailingCharacters))
            }
        })
        .inspect_err(|err| log::debug!("Failed to parse signature `{input}`: {err}"))
}

impl JavaTypeSignature {
    /// Parses a primitive type or a reference type.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        if let Some(base_type) = cursor.char_at(0).and_then(|c| BaseType::try_from(c).ok()) {
            cursor.increment(1);
            Ok(Self::Base(base_type))
        } else {
            ReferenceTypeSignature::parse(cursor).map(Self::Reference)
        }
    }
}

impl ReferenceTypeSignature {
    /// Parses a class type, an array type, or a type variable.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        match cursor.char_at(0) {
            Some('L') => ClassTypeSignature::parse(cursor).map(Self::Class),
            Some('T') => TypeVariableSignature::parse(cursor).map(Self::TypeVariable),
            Some('[') => ArrayTypeSignature::parse(cursor).map(Self::Array),
            _ => Err(cursor.unexpected("a reference type ('L', 'T' or '[')")),
        }
    }
}

impl ClassTypeSignature {
    /// Parses a class type, e.g., `Ljava/util/Map<TK;TV;>.Entry<TK;TV;>;`.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        cursor.expect('L', "a class type ('L')")?;
        let binary_name = parse_binary_name(cursor)?;
        let type_arguments = parse_type_arguments(cursor)?;
        let mut inner_types = Vec::new();
        while cursor.consume('.') {
            inner_types.push(SimpleClassTypeSignature::parse(cursor)?);
        }
        cursor.expect(';', "the end of a class type (';')")?;
        Ok(Self {
            binary_name,
            type_arguments,
            inner_types,
        })
    }
}

/// Parses a binary name such as `java/lang/Object`, i.e., identifiers separated by `/`.
fn parse_binary_name(cursor: &mut Cursor<'_>) -> Result<String, MalformedSignature> {
    let mut len = 0;
    loop {
        let segment_len = cursor.identifier_len(len);
        if segment_len == 0 {
            cursor.increment(len);
            return Err(cursor.error(MalformedSignatureKind::EmptyIdentifier {
                production: "a binary class name",
            }));
        }
        len += segment_len;
        if cursor.char_at(len) == Some('/') {
            len += 1;
        } else {
            break;
        }
    }
    let binary_name = cursor.substring(0, len).unwrap_or_default().to_owned();
    cursor.increment(len);
    Ok(binary_name)
}

/// Parses an optional list of type arguments enclosed in `<` and `>`.
fn parse_type_arguments(cursor: &mut Cursor<'_>) -> Result<Vec<TypeArgument>, MalformedSignature> {
    if cursor.char_at(0) != Some('<') {
        return Ok(Vec::new());
    }
    cursor.enter_nested()?;
    cursor.increment(1);
    let mut type_arguments = Vec::new();
    let result = loop {
        match TypeArgument::parse(cursor) {
            Ok(type_argument) => type_arguments.push(type_argument),
            Err(err) => break Err(err),
        }
        if cursor.consume('>') {
            break Ok(type_arguments);
        }
    };
    cursor.leave_nested();
    result
}

impl SimpleClassTypeSignature {
    /// Parses the name and the type arguments of a nested class.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        let identifier = cursor.take_identifier("a nested class type")?;
        let type_arguments = parse_type_arguments(cursor)?;
        Ok(Self {
            identifier,
            type_arguments,
        })
    }
}

impl TypeArgument {
    /// Parses a type argument, e.g., `*`, `+Ljava/lang/Number;`, or `TT;`.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        match cursor.char_at(0) {
            Some('*') => {
                cursor.increment(1);
                Ok(Self::Wild)
            }
            Some('+') => {
                cursor.increment(1);
                ReferenceTypeSignature::parse(cursor).map(Self::Extends)
            }
            Some('-') => {
                cursor.increment(1);
                ReferenceTypeSignature::parse(cursor).map(Self::Super)
            }
            _ => ReferenceTypeSignature::parse(cursor).map(Self::Exact),
        }
    }
}

impl ArrayTypeSignature {
    /// Parses an array type, e.g., `[[I`.
    /// All the dimensions are consumed before the element type is parsed.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        let dimensions = cursor
            .remaining()
            .bytes()
            .take_while(|&it| it == b'[')
            .count();
        if dimensions == 0 {
            return Err(cursor.unexpected("an array type ('[')"));
        }
        if dimensions > Self::MAX_DIMENSIONS {
            cursor.increment(Self::MAX_DIMENSIONS);
            return Err(cursor.error(MalformedSignatureKind::NestedTooDeeply {
                limit: Self::MAX_DIMENSIONS,
            }));
        }
        cursor.increment(dimensions);
        let component = JavaTypeSignature::parse(cursor)?;
        Ok(Self::with_dimensions(component, dimensions))
    }
}

impl TypeVariableSignature {
    /// Parses a reference to a type variable, e.g., `TT;`.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        cursor.expect('T', "a type variable ('T')")?;
        let identifier = cursor.take_identifier("a type variable")?;
        cursor.expect(';', "the end of a type variable (';')")?;
        Ok(Self { identifier })
    }
}

impl TypeParameter {
    /// Parses a type parameter, e.g., `T:Ljava/lang/Object;` or `T::Ljava/lang/Comparable<TT;>;`.
    ///
    /// The class bound is present only if a reference type follows the first `:`.
    /// A parameter with neither class bound nor interface bounds (`T:`) is accepted.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        let identifier = cursor.take_identifier("a type parameter")?;
        cursor.expect(':', "the bound of a type parameter (':')")?;
        let class_bound = match cursor.char_at(0) {
            Some('L' | 'T' | '[') => Some(ReferenceTypeSignature::parse(cursor)?),
            _ => None,
        };
        let mut interface_bounds = Vec::new();
        while cursor.consume(':') {
            interface_bounds.push(ReferenceTypeSignature::parse(cursor)?);
        }
        Ok(Self {
            identifier,
            class_bound,
            interface_bounds,
        })
    }
}

/// Parses an optional list of type parameters enclosed in `<` and `>`.
fn parse_type_parameters(
    cursor: &mut Cursor<'_>,
) -> Result<Vec<TypeParameter>, MalformedSignature> {
    let mut type_parameters = Vec::new();
    if cursor.consume('<') {
        loop {
            type_parameters.push(TypeParameter::parse(cursor)?);
            if cursor.consume('>') {
                break;
            }
        }
    }
    Ok(type_parameters)
}

impl ClassSignature {
    /// Parses the signature of a class.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        let type_parameters = parse_type_parameters(cursor)?;
        let super_class = ClassTypeSignature::parse(cursor)?;
        let mut super_interfaces = Vec::new();
        while cursor.char_at(0) == Some('L') {
            super_interfaces.push(ClassTypeSignature::parse(cursor)?);
        }
        Ok(Self {
            type_parameters,
            super_class,
            super_interfaces,
        })
    }
}

impl MethodSignature {
    /// Parses the signature of a method.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        let type_parameters = parse_type_parameters(cursor)?;
        cursor.expect('(', "the parameter list of a method ('(')")?;
        let mut parameter_types = Vec::new();
        while !cursor.consume(')') {
            parameter_types.push(JavaTypeSignature::parse(cursor)?);
        }
        let result_type = ReturnType::parse(cursor)?;
        let mut throw_types = Vec::new();
        while cursor.consume('^') {
            throw_types.push(ThrowsSignature::parse(cursor)?);
        }
        Ok(Self {
            type_parameters,
            parameter_types,
            result_type,
            throw_types,
        })
    }
}

impl FieldSignature {
    /// Parses the signature of a field.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        ReferenceTypeSignature::parse(cursor).map(|field_type| Self { field_type })
    }
}

impl ReturnType {
    /// Parses a return type, i.e., `V` or a [`JavaTypeSignature`].
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        if cursor.consume('V') {
            Ok(Self::Void)
        } else {
            JavaTypeSignature::parse(cursor).map(Self::Some)
        }
    }
}

impl ThrowsSignature {
    /// Parses an entry of a `throws` clause, without the leading `^`.
    /// # Errors
    /// See [`MalformedSignature`].
    pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self, MalformedSignature> {
        match cursor.char_at(0) {
            Some('L') => ClassTypeSignature::parse(cursor).map(Self::Class),
            Some('T') => TypeVariableSignature::parse(cursor).map(Self::TypeVariable),
            _ => Err(cursor.unexpected("a thrown type ('L' or 'T')")),
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = MalformedSignature;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_complete(s, Self::parse)
                }
            }
        )+
    };
}

impl_from_str!(
    JavaTypeSignature,
    ReferenceTypeSignature,
    ClassTypeSignature,
    ArrayTypeSignature,
    TypeVariableSignature,
    TypeArgument,
    TypeParameter,
    ClassSignature,
    MethodSignature,
    FieldSignature,
    ReturnType,
    ThrowsSignature,
);
