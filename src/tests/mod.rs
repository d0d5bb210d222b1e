use proptest::prelude::*;

use crate::types::signatures::{
    ArrayTypeSignature, BaseType, ClassSignature, ClassTypeSignature, FieldSignature,
    Identifier, JavaTypeSignature, MethodSignature, ReferenceTypeSignature, ReturnType,
    SimpleClassTypeSignature, ThrowsSignature, TypeArgument, TypeParameter,
    TypeVariableSignature,
};

pub(crate) fn arb_identifier() -> impl Strategy<Value = Identifier> {
    prop::string::string_regex(r"[a-zA-Z_\$][a-zA-Z0-9_\$]{0,8}")
        .expect("The regex is invalid")
        .prop_map(Identifier::new)
}

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> + Clone {
    let arb_ident =
        prop::string::string_regex(r"[a-zA-Z][a-zA-Z0-9_\$]{0,8}").expect("The regex is invalid").boxed();
    prop::collection::vec(arb_ident, 1..5).prop_map(|v| v.join("/"))
}

fn arb_type_variable() -> impl Strategy<Value = TypeVariableSignature> {
    arb_identifier().prop_map(TypeVariableSignature::new)
}

fn arb_class_type_with(
    type_argument: impl Strategy<Value = TypeArgument> + Clone,
) -> impl Strategy<Value = ClassTypeSignature> {
    let arguments = prop::collection::vec(type_argument, 0..3);
    let inner_type =
        (arb_identifier(), arguments.clone()).prop_map(|(identifier, type_arguments)| {
            SimpleClassTypeSignature {
                identifier,
                type_arguments,
            }
        });
    (
        arb_class_name(),
        arguments,
        prop::collection::vec(inner_type, 0..2),
    )
        .prop_map(|(binary_name, type_arguments, inner_types)| ClassTypeSignature {
            binary_name,
            type_arguments,
            inner_types,
        })
}

fn arb_type_argument_with(
    reference_type: impl Strategy<Value = ReferenceTypeSignature> + Clone,
) -> impl Strategy<Value = TypeArgument> + Clone {
    prop_oneof![
        Just(TypeArgument::Wild),
        reference_type.clone().prop_map(TypeArgument::Exact),
        reference_type.clone().prop_map(TypeArgument::Extends),
        reference_type.prop_map(TypeArgument::Super),
    ]
}

/// Reference types nested a few levels deep through type arguments and arrays.
pub(crate) fn arb_reference_type() -> impl Strategy<Value = ReferenceTypeSignature> + Clone {
    let leaf = prop_oneof![
        arb_class_name().prop_map(|it| ReferenceTypeSignature::from(ClassTypeSignature::new(it))),
        arb_type_variable().prop_map(ReferenceTypeSignature::TypeVariable),
        (any::<BaseType>(), 1..4usize).prop_map(|(base, dim)| {
            ReferenceTypeSignature::from(ArrayTypeSignature::with_dimensions(base, dim))
        }),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            arb_class_type_with(arb_type_argument_with(inner.clone()))
                .prop_map(ReferenceTypeSignature::Class),
            (inner, 1..3usize).prop_map(|(component, dim)| {
                ReferenceTypeSignature::from(ArrayTypeSignature::with_dimensions(component, dim))
            }),
        ]
    })
}

pub(crate) fn arb_java_type() -> impl Strategy<Value = JavaTypeSignature> {
    prop_oneof![
        any::<BaseType>().prop_map(JavaTypeSignature::Base),
        arb_reference_type().prop_map(JavaTypeSignature::Reference),
    ]
}

/// Types that do not mention any type variable.
pub(crate) fn arb_variable_free_java_type() -> impl Strategy<Value = JavaTypeSignature> {
    let class_type = arb_class_name().prop_map(|binary_name| ClassTypeSignature {
        binary_name,
        type_arguments: vec![TypeArgument::Wild],
        inner_types: Vec::new(),
    });
    prop_oneof![
        any::<BaseType>().prop_map(JavaTypeSignature::Base),
        class_type.clone().prop_map(JavaTypeSignature::from),
        (class_type, 1..4usize).prop_map(|(it, dim)| {
            JavaTypeSignature::from(ArrayTypeSignature::with_dimensions(it, dim))
        }),
        (any::<BaseType>(), 1..4usize).prop_map(|(it, dim)| {
            JavaTypeSignature::from(ArrayTypeSignature::with_dimensions(it, dim))
        }),
    ]
}

/// Type parameters with at least one bound, which is what `javac` emits.
pub(crate) fn arb_type_parameter() -> impl Strategy<Value = TypeParameter> {
    (
        arb_identifier(),
        prop::option::of(arb_reference_type()),
        prop::collection::vec(arb_reference_type(), 0..3),
    )
        .prop_filter(
            "A type parameter needs a bound",
            |(_, class_bound, interface_bounds)| {
                class_bound.is_some() || !interface_bounds.is_empty()
            },
        )
        .prop_map(|(identifier, class_bound, interface_bounds)| TypeParameter {
            identifier,
            class_bound,
            interface_bounds,
        })
}

fn arb_class_type() -> impl Strategy<Value = ClassTypeSignature> {
    arb_class_type_with(arb_type_argument_with(arb_reference_type()))
}

prop_compose! {
    pub(crate) fn arb_class_signature()(
        type_parameters in prop::collection::vec(arb_type_parameter(), 0..3),
        super_class in arb_class_type(),
        super_interfaces in prop::collection::vec(arb_class_type(), 0..3),
    ) -> ClassSignature {
        ClassSignature { type_parameters, super_class, super_interfaces }
    }
}

fn arb_throws() -> impl Strategy<Value = ThrowsSignature> {
    prop_oneof![
        arb_class_type().prop_map(ThrowsSignature::Class),
        arb_type_variable().prop_map(ThrowsSignature::TypeVariable),
    ]
}

prop_compose! {
    pub(crate) fn arb_method_signature()(
        type_parameters in prop::collection::vec(arb_type_parameter(), 0..3),
        parameter_types in prop::collection::vec(arb_java_type(), 0..4),
        result_type in prop::option::of(arb_java_type()),
        throw_types in prop::collection::vec(arb_throws(), 0..2),
    ) -> MethodSignature {
        MethodSignature {
            type_parameters,
            parameter_types,
            result_type: result_type.map_or(ReturnType::Void, ReturnType::Some),
            throw_types,
        }
    }
}

pub(crate) fn arb_field_signature() -> impl Strategy<Value = FieldSignature> {
    arb_reference_type().prop_map(|field_type| FieldSignature { field_type })
}
