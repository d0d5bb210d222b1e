use std::fmt::Display;

use itertools::Itertools;

use crate::intrinsics::see_jvm_spec;

use super::{
    identifier::Identifier,
    reference_type::{
        ClassTypeSignature, JavaTypeSignature, ReferenceTypeSignature, TypeVariableSignature,
    },
};

/// A type parameter declared by a generic class or a generic method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    /// The name of the type parameter.
    pub identifier: Identifier,
    /// The class bound, i.e., the bound after the first `:`.
    /// It is absent when the parameter is bounded only by interfaces.
    pub class_bound: Option<ReferenceTypeSignature>,
    /// The interface bounds, in declaration order.
    pub interface_bounds: Vec<ReferenceTypeSignature>,
}

impl TypeParameter {
    /// Returns the bound a reference to this parameter erases to.
    /// This is the class bound if present, and the first interface bound otherwise.
    /// Returns [`None`] if the parameter declares no bound at all.
    #[must_use]
    pub fn bound(&self) -> Option<&ReferenceTypeSignature> {
        self.class_bound
            .as_ref()
            .or_else(|| self.interface_bounds.first())
    }
}

impl Display for TypeParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.identifier)?;
        if let Some(class_bound) = &self.class_bound {
            write!(f, "{class_bound}")?;
        }
        for interface_bound in &self.interface_bounds {
            write!(f, ":{interface_bound}")?;
        }
        Ok(())
    }
}

fn write_type_parameters(
    f: &mut std::fmt::Formatter<'_>,
    type_parameters: &[TypeParameter],
) -> std::fmt::Result {
    if type_parameters.is_empty() {
        Ok(())
    } else {
        write!(f, "<{}>", type_parameters.iter().format(""))
    }
}

/// The generic signature of a class.
#[doc = see_jvm_spec!(4, 7, 9, 1)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassSignature {
    /// The type parameters of the class.
    pub type_parameters: Vec<TypeParameter>,
    /// The superclass.
    pub super_class: ClassTypeSignature,
    /// The implemented interfaces, in declaration order.
    pub super_interfaces: Vec<ClassTypeSignature>,
}

impl ClassSignature {
    /// Finds the type parameter declared with the given name.
    #[must_use]
    pub fn type_parameter(&self, identifier: &Identifier) -> Option<&TypeParameter> {
        self.type_parameters
            .iter()
            .find(|it| &it.identifier == identifier)
    }
}

impl Display for ClassSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_type_parameters(f, &self.type_parameters)?;
        write!(f, "{}", self.super_class)?;
        for interface in &self.super_interfaces {
            write!(f, "{interface}")?;
        }
        Ok(())
    }
}

/// The generic signature of a method.
#[doc = see_jvm_spec!(4, 7, 9, 1)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    /// The type parameters of the method.
    pub type_parameters: Vec<TypeParameter>,
    /// The types of the parameters.
    pub parameter_types: Vec<JavaTypeSignature>,
    /// The return type.
    pub result_type: ReturnType,
    /// The types in the `throws` clause.
    pub throw_types: Vec<ThrowsSignature>,
}

impl MethodSignature {
    /// Finds the type parameter declared with the given name by the method itself.
    #[must_use]
    pub fn type_parameter(&self, identifier: &Identifier) -> Option<&TypeParameter> {
        self.type_parameters
            .iter()
            .find(|it| &it.identifier == identifier)
    }
}

impl Display for MethodSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_type_parameters(f, &self.type_parameters)?;
        write!(
            f,
            "({}){}",
            self.parameter_types.iter().format(""),
            self.result_type
        )?;
        for throws in &self.throw_types {
            write!(f, "^{throws}")?;
        }
        Ok(())
    }
}

/// The generic signature of a field, a formal parameter, a local variable, or a record
/// component.
#[doc = see_jvm_spec!(4, 7, 9, 1)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{field_type}")]
pub struct FieldSignature {
    /// The type of the field.
    pub field_type: ReferenceTypeSignature,
}

/// Denotes the return type of a method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReturnType {
    /// The method returns a specific type.
    #[display("{_0}")]
    Some(JavaTypeSignature),
    /// The return type of the method is `void`.
    #[display("V")]
    Void,
}

/// A type in the `throws` clause of a method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ThrowsSignature {
    /// An exception class.
    #[display("{_0}")]
    Class(ClassTypeSignature),
    /// A type variable bounded by an exception class.
    #[display("{_0}")]
    TypeVariable(TypeVariableSignature),
}

impl From<ThrowsSignature> for ReferenceTypeSignature {
    fn from(value: ThrowsSignature) -> Self {
        match value {
            ThrowsSignature::Class(it) => Self::Class(it),
            ThrowsSignature::TypeVariable(it) => Self::TypeVariable(it),
        }
    }
}

/// Any of the generic signatures stored in a `Signature` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum Signature {
    /// The signature of a class.
    #[display("{_0}")]
    Class(ClassSignature),
    /// The signature of a method.
    #[display("{_0}")]
    Method(MethodSignature),
    /// The signature of a field.
    #[display("{_0}")]
    Field(FieldSignature),
}
