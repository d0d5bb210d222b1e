#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Parsing and resolution of the generic signatures stored in JVM class files.
//!
//! The ordinary descriptors of fields and methods erase all generic information.
//! The `Signature` attribute keeps it, encoded in a compact grammar. This crate parses that
//! grammar into an immutable tree, resolves type variables to their declared bounds, and
//! computes the set of classes a signature refers to.
//!
//! ```
//! use jvm_signatures::types::signatures::{
//!     ClassSignature, ErasedBinaryReferences, MethodResolver, MethodSignature,
//! };
//!
//! let class_sig: ClassSignature = "<T:Ljava/lang/Number;>Ljava/lang/Object;".parse().unwrap();
//! let method_sig: MethodSignature = "(Ljava/util/List<TT;>;)[TT;".parse().unwrap();
//!
//! let resolver = MethodResolver::new(&class_sig, &method_sig);
//! let result = resolver.resolve_result().unwrap();
//! assert_eq!(result.to_string(), "[Ljava/lang/Number;");
//!
//! let refs = method_sig.erased_binary_references();
//! assert!(refs.contains("java/util/List"));
//! ```
//! ## Features
#![doc = document_features::document_features!()]

pub(crate) mod intrinsics;
pub mod types;

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
