//! Extraction of the classes a signature depends on.
//!
//! Only the structure of the signature instance is walked. The declarations of the referenced
//! classes and the bounds of type variables are never followed, so the walk always terminates,
//! even for self-referential bounds such as `T extends Comparable<T>`.

use std::collections::BTreeSet;

use super::{
    base_type::BaseType,
    declarations::{
        ClassSignature, FieldSignature, MethodSignature, ReturnType, Signature, ThrowsSignature,
        TypeParameter,
    },
    reference_type::{
        ArrayTypeSignature, ClassTypeSignature, JavaTypeSignature, ReferenceTypeSignature,
        TypeArgument, TypeVariableSignature,
    },
};

/// A signature element that refers to classes by their binary names.
pub trait ErasedBinaryReferences {
    /// Adds the binary names of the classes referenced by `self` to `references`.
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>);

    /// Returns the binary names of the classes referenced by `self`.
    /// Nested classes are named with `$`, e.g., `java/util/Map$Entry`.
    fn erased_binary_references(&self) -> BTreeSet<String> {
        let mut references = BTreeSet::new();
        self.collect_erased_binary_references(&mut references);
        references
    }
}

impl<T: ErasedBinaryReferences> ErasedBinaryReferences for [T] {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        for it in self {
            it.collect_erased_binary_references(references);
        }
    }
}

impl<T: ErasedBinaryReferences> ErasedBinaryReferences for Option<T> {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        if let Some(it) = self {
            it.collect_erased_binary_references(references);
        }
    }
}

impl ErasedBinaryReferences for BaseType {
    fn collect_erased_binary_references(&self, _references: &mut BTreeSet<String>) {}
}

impl ErasedBinaryReferences for TypeVariableSignature {
    fn collect_erased_binary_references(&self, _references: &mut BTreeSet<String>) {}
}

impl ErasedBinaryReferences for JavaTypeSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        match self {
            Self::Base(it) => it.collect_erased_binary_references(references),
            Self::Reference(it) => it.collect_erased_binary_references(references),
        }
    }
}

impl ErasedBinaryReferences for ReferenceTypeSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        match self {
            Self::Class(it) => it.collect_erased_binary_references(references),
            Self::Array(it) => it.collect_erased_binary_references(references),
            Self::TypeVariable(it) => it.collect_erased_binary_references(references),
        }
    }
}

impl ErasedBinaryReferences for ArrayTypeSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        let (component, _) = self.innermost_component();
        component.collect_erased_binary_references(references);
    }
}

impl ErasedBinaryReferences for ClassTypeSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        references.insert(self.erased_binary_name().into_owned());
        self.type_arguments.collect_erased_binary_references(references);
        for inner in &self.inner_types {
            inner.type_arguments.collect_erased_binary_references(references);
        }
    }
}

impl ErasedBinaryReferences for TypeArgument {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        self.reference_type().collect_erased_binary_references(references);
    }
}

impl<T: ErasedBinaryReferences> ErasedBinaryReferences for &T {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        (**self).collect_erased_binary_references(references);
    }
}

impl ErasedBinaryReferences for TypeParameter {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        self.class_bound.collect_erased_binary_references(references);
        self.interface_bounds.collect_erased_binary_references(references);
    }
}

impl ErasedBinaryReferences for ClassSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        self.type_parameters.collect_erased_binary_references(references);
        self.super_class.collect_erased_binary_references(references);
        self.super_interfaces.collect_erased_binary_references(references);
    }
}

impl ErasedBinaryReferences for ReturnType {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        match self {
            Self::Some(it) => it.collect_erased_binary_references(references),
            Self::Void => {}
        }
    }
}

impl ErasedBinaryReferences for ThrowsSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        match self {
            Self::Class(it) => it.collect_erased_binary_references(references),
            Self::TypeVariable(it) => it.collect_erased_binary_references(references),
        }
    }
}

impl ErasedBinaryReferences for MethodSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        self.type_parameters.collect_erased_binary_references(references);
        self.parameter_types.collect_erased_binary_references(references);
        self.result_type.collect_erased_binary_references(references);
        self.throw_types.collect_erased_binary_references(references);
    }
}

impl ErasedBinaryReferences for FieldSignature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        self.field_type.collect_erased_binary_references(references);
    }
}

impl ErasedBinaryReferences for Signature {
    fn collect_erased_binary_references(&self, references: &mut BTreeSet<String>) {
        match self {
            Self::Class(it) => it.collect_erased_binary_references(references),
            Self::Method(it) => it.collect_erased_binary_references(references),
            Self::Field(it) => it.collect_erased_binary_references(references),
        }
    }
}
