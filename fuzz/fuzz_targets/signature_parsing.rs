#![no_main]

use jvm_signatures::types::signatures::{
    ClassResolver, ClassSignature, ClassTypeSignature, ErasedBinaryReferences, FieldSignature,
    MethodResolver, MethodSignature, TypeResolver,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(class_sig) = data.parse::<ClassSignature>() {
        assert_eq!(class_sig.to_string(), data);
        let _ = class_sig.erased_binary_references();
        let resolver = ClassResolver::new(&class_sig);
        for type_parameter in &class_sig.type_parameters {
            let _ = type_parameter
                .class_bound
                .as_ref()
                .map(|it| resolver.resolve_reference_type(it));
        }
    }
    if let Ok(method_sig) = data.parse::<MethodSignature>() {
        let class_sig = ClassSignature {
            type_parameters: Vec::new(),
            super_class: ClassTypeSignature::object(),
            super_interfaces: Vec::new(),
        };
        let resolver = MethodResolver::new(&class_sig, &method_sig);
        for index in 0..method_sig.parameter_types.len() {
            assert!(resolver.resolve_parameter(index).is_ok());
        }
        let _ = resolver.resolve_result();
    }
    if let Ok(field_sig) = data.parse::<FieldSignature>() {
        let _ = field_sig.erased_binary_references();
    }
});
