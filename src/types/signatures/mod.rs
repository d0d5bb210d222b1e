//! Generic type signatures in the JVM.
//!
//! Signatures are parsed from the text stored in `Signature` attributes, e.g.,
//! `<T:Ljava/lang/Object;>(TT;)TT;`, into a tree of types. Type variables in the tree can be
//! resolved to their bounds with a [`TypeResolver`], and the classes a signature depends on
//! can be listed with [`ErasedBinaryReferences`].
//!
//! See the [JVM Specification §4.7.9.1](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.7.9.1) for more information.

pub mod arena;
mod base_type;
mod cursor;
mod declarations;
mod erasure;
mod errors;
mod identifier;
mod parser;
mod reference_type;
mod resolver;

pub use base_type::{BaseType, InvalidBaseType};
pub use cursor::Cursor;
pub use declarations::{
    ClassSignature, FieldSignature, MethodSignature, ReturnType, Signature, ThrowsSignature,
    TypeParameter,
};
pub use erasure::ErasedBinaryReferences;
pub use errors::{MalformedSignature, MalformedSignatureKind, ResolutionError};
pub use identifier::Identifier;
pub use reference_type::{
    ArrayTypeSignature, ClassTypeSignature, JavaTypeSignature, ReferenceTypeSignature,
    SimpleClassTypeSignature, TypeArgument, TypeVariableSignature, WildcardIndicator,
};
pub use resolver::{ClassResolver, FieldResolver, MethodResolver, TypeResolver};
