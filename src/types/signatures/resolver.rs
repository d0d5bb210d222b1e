//! Resolution of type variables to their declared bounds.
//!
//! A [`ClassResolver`] sees the type parameters of a class. A [`MethodResolver`] additionally
//! sees the type parameters of a method, which shadow class-level parameters of the same name.
//! Resolution never modifies the signatures it reads; resolved types are new values.

use super::{
    declarations::{
        ClassSignature, FieldSignature, MethodSignature, ReturnType, ThrowsSignature,
        TypeParameter,
    },
    errors::ResolutionError,
    identifier::Identifier,
    reference_type::{
        ArrayTypeSignature, ClassTypeSignature, JavaTypeSignature, ReferenceTypeSignature,
        TypeArgument, TypeVariableSignature,
    },
};

/// A scope in which type variables can be resolved to their bounds.
///
/// A resolved type variable is the class bound of its declaring [`TypeParameter`], or the
/// first interface bound if there is no class bound.
/// [`None`] means the variable is unknown or unbounded, which is to be treated as
/// `java.lang.Object`.
pub trait TypeResolver {
    /// Resolves a type variable to its bound.
    fn resolve_type_variable(
        &self,
        variable: &TypeVariableSignature,
    ) -> Option<ReferenceTypeSignature>;

    /// Resolves a reference type.
    /// Class types are returned unchanged. Arrays keep their dimensions, and only a type
    /// variable as the innermost component is resolved.
    fn resolve_reference_type(
        &self,
        reference_type: &ReferenceTypeSignature,
    ) -> Option<ReferenceTypeSignature> {
        match reference_type {
            ReferenceTypeSignature::Class(_) => Some(reference_type.clone()),
            ReferenceTypeSignature::Array(array) => {
                Some(ReferenceTypeSignature::Array(self.resolve_array_type(array)))
            }
            ReferenceTypeSignature::TypeVariable(variable) => self.resolve_type_variable(variable),
        }
    }

    /// Resolves the innermost component of an array and rebuilds an array of the same
    /// dimensions around it. A component that cannot be resolved becomes `java.lang.Object`.
    fn resolve_array_type(&self, array: &ArrayTypeSignature) -> ArrayTypeSignature {
        let (component, dimensions) = array.innermost_component();
        let resolved_component = match component {
            JavaTypeSignature::Reference(ReferenceTypeSignature::TypeVariable(variable)) => self
                .resolve_type_variable(variable)
                .unwrap_or_else(|| ClassTypeSignature::object().into())
                .into(),
            _ => component.clone(),
        };
        ArrayTypeSignature::with_dimensions(resolved_component, dimensions)
    }

    /// Resolves a primitive or reference type. Primitive types are returned unchanged.
    fn resolve_type(&self, java_type: &JavaTypeSignature) -> Option<JavaTypeSignature> {
        match java_type {
            JavaTypeSignature::Base(_) => Some(java_type.clone()),
            JavaTypeSignature::Reference(reference_type) => self
                .resolve_reference_type(reference_type)
                .map(JavaTypeSignature::Reference),
        }
    }

    /// Resolves the upper bound of a type argument.
    /// Returns [`None`] for `? super` and `?`, which have no upper bound other than
    /// `java.lang.Object`.
    fn resolve_type_argument(&self, type_argument: &TypeArgument) -> Option<ReferenceTypeSignature> {
        match type_argument {
            TypeArgument::Exact(it) | TypeArgument::Extends(it) => self.resolve_reference_type(it),
            TypeArgument::Super(_) | TypeArgument::Wild => None,
        }
    }
}

/// Looks `variable` up in `scope` and follows bounds that are themselves type variables.
/// Variables not declared in `scope` are handed to `outer`.
fn resolve_in_scope<F>(
    scope: &[TypeParameter],
    variable: &TypeVariableSignature,
    outer: F,
) -> Option<ReferenceTypeSignature>
where
    F: Fn(&TypeVariableSignature) -> Option<ReferenceTypeSignature>,
{
    let mut visited: Vec<&Identifier> = Vec::new();
    let mut current = variable;
    loop {
        let Some(type_parameter) = scope.iter().find(|it| it.identifier == current.identifier)
        else {
            return outer(current);
        };
        if visited.contains(&&current.identifier) {
            log::trace!(
                "Type variable {} has a cyclic bound, treating it as unbounded",
                variable.identifier
            );
            return None;
        }
        visited.push(&current.identifier);
        match type_parameter.bound() {
            Some(ReferenceTypeSignature::TypeVariable(next)) => current = next,
            Some(bound) => return Some(bound.clone()),
            None => {
                log::trace!("Type variable {} is unbounded", current.identifier);
                return None;
            }
        }
    }
}

/// Resolves type variables declared by a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassResolver<'a> {
    class_signature: &'a ClassSignature,
}

impl<'a> ClassResolver<'a> {
    /// Creates a resolver for the type parameters of `class_signature`.
    #[must_use]
    pub const fn new(class_signature: &'a ClassSignature) -> Self {
        Self { class_signature }
    }

    /// Returns the signature of the class.
    #[must_use]
    pub const fn class_signature(&self) -> &'a ClassSignature {
        self.class_signature
    }
}

impl TypeResolver for ClassResolver<'_> {
    fn resolve_type_variable(
        &self,
        variable: &TypeVariableSignature,
    ) -> Option<ReferenceTypeSignature> {
        resolve_in_scope(&self.class_signature.type_parameters, variable, |unknown| {
            log::trace!("Type variable {} is not declared", unknown.identifier);
            None
        })
    }
}

/// Resolves type variables declared by a method or by its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodResolver<'a> {
    class_resolver: ClassResolver<'a>,
    method_signature: &'a MethodSignature,
}

impl<'a> MethodResolver<'a> {
    /// Creates a resolver for `method_signature` declared in a class with `class_signature`.
    #[must_use]
    pub const fn new(
        class_signature: &'a ClassSignature,
        method_signature: &'a MethodSignature,
    ) -> Self {
        Self {
            class_resolver: ClassResolver::new(class_signature),
            method_signature,
        }
    }

    /// Returns the resolver of the enclosing class.
    #[must_use]
    pub const fn class_resolver(&self) -> &ClassResolver<'a> {
        &self.class_resolver
    }

    /// Returns the signature of the method.
    #[must_use]
    pub const fn method_signature(&self) -> &'a MethodSignature {
        self.method_signature
    }

    /// Resolves the type of the parameter at `index`.
    /// # Errors
    /// - [`ResolutionError::ParameterIndex`] if the method has no parameter at `index`.
    pub fn resolve_parameter(
        &self,
        index: usize,
    ) -> Result<Option<JavaTypeSignature>, ResolutionError> {
        let parameter_types = &self.method_signature.parameter_types;
        parameter_types
            .get(index)
            .map(|it| self.resolve_type(it))
            .ok_or(ResolutionError::ParameterIndex {
                index,
                len: parameter_types.len(),
            })
    }

    /// Resolves the return type. `void` is returned unchanged.
    #[must_use]
    pub fn resolve_result(&self) -> Option<ReturnType> {
        match &self.method_signature.result_type {
            ReturnType::Some(it) => self.resolve_type(it).map(ReturnType::Some),
            ReturnType::Void => Some(ReturnType::Void),
        }
    }

    /// Resolves the type at `index` in the `throws` clause.
    /// # Errors
    /// - [`ResolutionError::ThrowsIndex`] if the `throws` clause has no entry at `index`.
    pub fn resolve_throws(
        &self,
        index: usize,
    ) -> Result<Option<ReferenceTypeSignature>, ResolutionError> {
        let throw_types = &self.method_signature.throw_types;
        throw_types
            .get(index)
            .map(|it| match it {
                ThrowsSignature::Class(class_type) => Some(class_type.clone().into()),
                ThrowsSignature::TypeVariable(variable) => self.resolve_type_variable(variable),
            })
            .ok_or(ResolutionError::ThrowsIndex {
                index,
                len: throw_types.len(),
            })
    }
}

impl TypeResolver for MethodResolver<'_> {
    fn resolve_type_variable(
        &self,
        variable: &TypeVariableSignature,
    ) -> Option<ReferenceTypeSignature> {
        resolve_in_scope(
            &self.method_signature.type_parameters,
            variable,
            |class_level| {
                log::trace!(
                    "Type variable {} is not declared by the method, looking it up in the class",
                    class_level.identifier
                );
                self.class_resolver.resolve_type_variable(class_level)
            },
        )
    }
}

/// Resolves the type of a field declared in a generic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldResolver<'a> {
    class_resolver: ClassResolver<'a>,
    field_signature: &'a FieldSignature,
}

impl<'a> FieldResolver<'a> {
    /// Creates a resolver for `field_signature` declared in a class with `class_signature`.
    #[must_use]
    pub const fn new(
        class_signature: &'a ClassSignature,
        field_signature: &'a FieldSignature,
    ) -> Self {
        Self {
            class_resolver: ClassResolver::new(class_signature),
            field_signature,
        }
    }

    /// Returns the signature of the field.
    #[must_use]
    pub const fn field_signature(&self) -> &'a FieldSignature {
        self.field_signature
    }

    /// Resolves the type of the field.
    #[must_use]
    pub fn resolve_field(&self) -> Option<ReferenceTypeSignature> {
        self.resolve_reference_type(&self.field_signature.field_type)
    }
}

impl TypeResolver for FieldResolver<'_> {
    fn resolve_type_variable(
        &self,
        variable: &TypeVariableSignature,
    ) -> Option<ReferenceTypeSignature> {
        self.class_resolver.resolve_type_variable(variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tests::{arb_class_signature, arb_variable_free_java_type},
        types::signatures::{BaseType, ErasedBinaryReferences},
    };
    use proptest::prelude::*;

    fn class(signature: &str) -> ClassSignature {
        signature.parse().expect("Failed to parse class signature")
    }

    fn method(signature: &str) -> MethodSignature {
        signature.parse().expect("Failed to parse method signature")
    }

    fn java_type(signature: &str) -> JavaTypeSignature {
        signature.parse().expect("Failed to parse type")
    }

    fn reference_type(signature: &str) -> ReferenceTypeSignature {
        signature.parse().expect("Failed to parse type")
    }

    #[test]
    fn generic_method_resolves_to_class_bound() {
        let class_sig = class("Ljava/lang/Object;");
        let method_sig = method("<T:Ljava/lang/Object;>(TT;)TT;");
        assert_eq!(method_sig.type_parameters.len(), 1);
        assert_eq!(
            method_sig.type_parameters[0].class_bound,
            Some(ClassTypeSignature::object().into())
        );
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(0),
            Ok(Some(ClassTypeSignature::object().into()))
        );
        assert_eq!(
            resolver.resolve_result(),
            Some(ReturnType::Some(ClassTypeSignature::object().into()))
        );
    }

    #[test]
    fn array_depth_is_preserved() {
        let class_sig = class("<T:Ljava/lang/Number;>Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        assert_eq!(
            resolver.resolve_type(&java_type("[TT;")),
            Some(java_type("[Ljava/lang/Number;"))
        );
        assert_eq!(
            resolver.resolve_type(&java_type("[[[TT;")),
            Some(java_type("[[[Ljava/lang/Number;"))
        );
    }

    #[test]
    fn unresolvable_array_component_becomes_object() {
        let class_sig = class("Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        assert_eq!(
            resolver.resolve_type(&java_type("[[TU;")),
            Some(java_type("[[Ljava/lang/Object;"))
        );
    }

    #[test]
    fn interface_bound_when_no_class_bound() {
        let class_sig = class("<T::Ljava/lang/Comparable<TT;>;>Ljava/lang/Object;");
        assert_eq!(class_sig.type_parameters[0].class_bound, None);
        let resolver = ClassResolver::new(&class_sig);
        let resolved = resolver.resolve_type_variable(&TypeVariableSignature::new("T"));
        assert_eq!(resolved, Some(reference_type("Ljava/lang/Comparable<TT;>;")));
        assert!(
            resolved
                .erased_binary_references()
                .contains("java/lang/Comparable")
        );
    }

    #[test]
    fn first_interface_bound_wins() {
        let class_sig =
            class("<T::Ljava/io/Serializable;:Ljava/lang/Comparable<TT;>;>Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        assert_eq!(
            resolver.resolve_type_variable(&TypeVariableSignature::new("T")),
            Some(reference_type("Ljava/io/Serializable;"))
        );
    }

    #[test]
    fn class_bound_wins_over_interfaces() {
        let class_sig =
            class("<T:Ljava/lang/Number;:Ljava/lang/Comparable<TT;>;>Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        assert_eq!(
            resolver.resolve_type_variable(&TypeVariableSignature::new("T")),
            Some(reference_type("Ljava/lang/Number;"))
        );
    }

    #[test]
    fn unknown_and_unbounded_variables() {
        let class_sig = class("<T:>Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        assert_eq!(
            resolver.resolve_type_variable(&TypeVariableSignature::new("T")),
            None
        );
        assert_eq!(
            resolver.resolve_type_variable(&TypeVariableSignature::new("U")),
            None
        );
    }

    #[test]
    fn method_parameters_shadow_class_parameters() {
        let class_sig = class("<T:Ljava/lang/Number;>Ljava/lang/Object;");
        let method_sig = method("<T:Ljava/lang/CharSequence;>(TT;)V");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(0),
            Ok(Some(java_type("Ljava/lang/CharSequence;")))
        );
        assert_eq!(
            resolver
                .class_resolver()
                .resolve_type_variable(&TypeVariableSignature::new("T")),
            Some(reference_type("Ljava/lang/Number;"))
        );
    }

    #[test]
    fn method_falls_back_to_class_parameters() {
        let class_sig = class("<K:Ljava/lang/Object;V:Ljava/lang/Number;>Ljava/lang/Object;");
        let method_sig = method("<T:Ljava/lang/Object;>(TK;TT;)TV;");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(0),
            Ok(Some(ClassTypeSignature::object().into()))
        );
        assert_eq!(
            resolver.resolve_result(),
            Some(ReturnType::Some(java_type("Ljava/lang/Number;")))
        );
    }

    #[test]
    fn void_and_primitives_are_unchanged() {
        let class_sig = class("Ljava/lang/Object;");
        let method_sig = method("(IJ)V");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(1),
            Ok(Some(JavaTypeSignature::Base(BaseType::Long)))
        );
        assert_eq!(resolver.resolve_result(), Some(ReturnType::Void));
    }

    #[test]
    fn parameter_index_out_of_range() {
        let class_sig = class("Ljava/lang/Object;");
        let method_sig = method("(I)V");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(1),
            Err(ResolutionError::ParameterIndex { index: 1, len: 1 })
        );
        assert_eq!(
            resolver.resolve_throws(0),
            Err(ResolutionError::ThrowsIndex { index: 0, len: 0 })
        );
    }

    #[test]
    fn chained_bounds() {
        let class_sig = class("<O:Ljava/lang/Number;X:TO;>Ljava/lang/Object;");
        let method_sig = method("<Y:TX;>(TY;)V");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(0),
            Ok(Some(java_type("Ljava/lang/Number;")))
        );
    }

    #[test]
    fn cyclic_bounds() {
        let class_sig = class("<A:TB;B:TA;>Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        assert_eq!(
            resolver.resolve_type_variable(&TypeVariableSignature::new("A")),
            None
        );
    }

    #[test]
    fn class_bound_is_not_shadowed_by_method() {
        let class_sig = class("<O:Ljava/lang/Number;X:TO;>Ljava/lang/Object;");
        let method_sig = method("<O:Ljava/lang/String;>(TX;)V");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_parameter(0),
            Ok(Some(java_type("Ljava/lang/Number;")))
        );
    }

    #[test]
    fn throws_clause() {
        let class_sig = class("Ljava/lang/Object;");
        let method_sig = method("<E:Ljava/lang/Exception;>()V^TE;^Ljava/io/IOException;");
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        assert_eq!(
            resolver.resolve_throws(0),
            Ok(Some(reference_type("Ljava/lang/Exception;")))
        );
        assert_eq!(
            resolver.resolve_throws(1),
            Ok(Some(reference_type("Ljava/io/IOException;")))
        );
    }

    #[test]
    fn type_arguments() {
        let class_sig = class("<S:Ljava/lang/Runnable;>Ljava/lang/Object;");
        let resolver = ClassResolver::new(&class_sig);
        let list: ClassTypeSignature = "Ljava/util/List<TS;>;".parse().unwrap();
        assert_eq!(
            resolver.resolve_type_argument(&list.type_arguments[0]),
            Some(reference_type("Ljava/lang/Runnable;"))
        );
        let list: ClassTypeSignature = "Ljava/util/List<+TS;>;".parse().unwrap();
        assert_eq!(
            resolver.resolve_type_argument(&list.type_arguments[0]),
            Some(reference_type("Ljava/lang/Runnable;"))
        );
        let list: ClassTypeSignature = "Ljava/util/List<-TS;>;".parse().unwrap();
        assert_eq!(resolver.resolve_type_argument(&list.type_arguments[0]), None);
        assert_eq!(resolver.resolve_type_argument(&TypeArgument::Wild), None);
    }

    #[test]
    fn field_resolver() {
        let class_sig = class("<E:Ljava/lang/Enum<TE;>;>Ljava/lang/Object;");
        let field_sig: FieldSignature = "[TE;".parse().unwrap();
        let resolver = FieldResolver::new(&class_sig, &field_sig);
        assert_eq!(
            resolver.resolve_field(),
            Some(reference_type("[Ljava/lang/Enum<TE;>;"))
        );
        let field_sig: FieldSignature = "Ljava/util/List<TE;>;".parse().unwrap();
        let resolver = FieldResolver::new(&class_sig, &field_sig);
        assert_eq!(resolver.resolve_field(), Some(field_sig.field_type.clone()));
    }

    #[test]
    fn resolution_does_not_modify_signatures() {
        let class_sig = class("<T:Ljava/lang/Number;>Ljava/lang/Object;");
        let method_sig = method("([TT;)TT;");
        let before = method_sig.clone();
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        let _ = resolver.resolve_parameter(0);
        let _ = resolver.resolve_result();
        assert_eq!(method_sig, before);
    }

    #[test]
    fn resolvers_compare_structurally() {
        let first = class("<T:Ljava/lang/Number;>Ljava/lang/Object;");
        let second = class("<T:Ljava/lang/Number;>Ljava/lang/Object;");
        let other = class("<T:Ljava/lang/Integer;>Ljava/lang/Object;");
        assert_eq!(ClassResolver::new(&first), ClassResolver::new(&second));
        assert_ne!(ClassResolver::new(&first), ClassResolver::new(&other));
    }

    proptest! {
        #[test]
        fn variable_free_types_are_unchanged(
            class_sig in arb_class_signature(),
            java_type in arb_variable_free_java_type(),
        ) {
            let resolver = ClassResolver::new(&class_sig);
            prop_assert_eq!(resolver.resolve_type(&java_type), Some(java_type));
        }
    }
}
