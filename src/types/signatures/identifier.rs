use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

/// An unqualified name in a signature, such as the name of a type variable or of a nested class.
///
/// Identifiers parsed from the same signature share one allocation per distinct name, so
/// comparing two occurrences of the same type variable does not need to look at the text.
#[derive(Debug, Clone, Eq, PartialOrd, Ord, derive_more::Display)]
#[display("{_0}")]
pub struct Identifier(Arc<str>);

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the text of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.0 == other.0
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_by_text() {
        let a = Identifier::new("T");
        let b = Identifier::new("T");
        assert!(!a.shares_storage_with(&b));
        assert_eq!(a, b);
        assert_ne!(a, Identifier::new("U"));
        assert_eq!(a, "T");
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::HashSet;
        let set: HashSet<_> = [Identifier::new("K"), Identifier::new("K"), Identifier::new("V")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
