/// An error indicating that a signature does not conform to the signature grammar.
///
/// Parsing stops at the first offending character. No partially parsed node is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed signature at offset {position}: {kind}")]
pub struct MalformedSignature {
    /// The byte offset in the signature at which the problem was detected.
    pub position: usize,
    /// What went wrong.
    pub kind: MalformedSignatureKind,
}

/// The kind of a [`MalformedSignature`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSignatureKind {
    /// A character that cannot start or continue the current production.
    #[error("expected {expected}, but found '{found}'")]
    UnexpectedChar {
        /// A description of what the production expects.
        expected: &'static str,
        /// The character that was found instead.
        found: char,
    },
    /// The signature ends in the middle of a production.
    #[error("expected {expected}, but reached the end of the signature")]
    UnexpectedEnd {
        /// A description of what the production expects.
        expected: &'static str,
    },
    /// A production requires an identifier, but none is present.
    #[error("expected an identifier in {production}")]
    EmptyIdentifier {
        /// The production containing the identifier.
        production: &'static str,
    },
    /// Array dimensions or type argument lists are nested beyond `limit`.
    #[error("nesting exceeds the limit of {limit} levels")]
    NestedTooDeeply {
        /// The maximum number of nested levels.
        limit: usize,
    },
    /// The signature was parsed completely but there are characters left.
    #[error("unexpected characters after the end of the signature")]
    TrailingCharacters,
}

/// An error indicating that a resolver was asked for an element that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// The parameter index is out of range.
    #[error("Parameter index {index} is out of range, the method has {len} parameters")]
    ParameterIndex {
        /// The requested index.
        index: usize,
        /// The number of parameters.
        len: usize,
    },
    /// The throws clause index is out of range.
    #[error("Throws clause index {index} is out of range, the method throws {len} types")]
    ThrowsIndex {
        /// The requested index.
        index: usize,
        /// The number of entries in the throws clause.
        len: usize,
    },
}
