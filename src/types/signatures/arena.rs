//! Deduplicated storage for signatures shared by many class members.

use std::{collections::HashMap, hash::Hash, marker::PhantomData, ops::Index, sync::Arc};

/// A handle to a value stored in a [`SignatureArena`].
#[derive(Debug)]
#[instability::unstable(feature = "signature-arena")]
pub struct SignatureId<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SignatureId<T> {
    const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Returns the position of the value in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl<T> Clone for SignatureId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SignatureId<T> {}

impl<T> PartialEq for SignatureId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for SignatureId<T> {}

impl<T> Hash for SignatureId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// Stores each distinct signature once.
///
/// Structurally equal values are stored once and get the same [`SignatureId`].
/// Values are never removed, so an id stays valid for the lifetime of its arena.
#[derive(Debug)]
#[instability::unstable(feature = "signature-arena")]
pub struct SignatureArena<T> {
    values: Vec<Arc<T>>,
    ids: HashMap<Arc<T>, usize>,
}

impl<T> Default for SignatureArena<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            ids: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> SignatureArena<T> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` unless an equal value is already stored, and returns its id.
    pub fn intern(&mut self, value: T) -> SignatureId<T> {
        if let Some(&index) = self.ids.get(&value) {
            return SignatureId::new(index);
        }
        let index = self.values.len();
        let value = Arc::new(value);
        self.values.push(Arc::clone(&value));
        self.ids.insert(value, index);
        SignatureId::new(index)
    }

    /// Returns the id of a stored value equal to `value`.
    #[must_use]
    pub fn lookup(&self, value: &T) -> Option<SignatureId<T>> {
        self.ids.get(value).map(|&index| SignatureId::new(index))
    }

    /// Returns the value with the given id, or [`None`] if the id belongs to another arena.
    #[must_use]
    pub fn get(&self, id: SignatureId<T>) -> Option<&T> {
        self.values.get(id.index).map(Arc::as_ref)
    }

    /// Returns a shared handle to the value with the given id.
    #[must_use]
    pub fn get_shared(&self, id: SignatureId<T>) -> Option<Arc<T>> {
        self.values.get(id.index).cloned()
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the stored values in the order they were first interned.
    pub fn iter(&self) -> impl Iterator<Item = (SignatureId<T>, &T)> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (SignatureId::new(index), value.as_ref()))
    }
}

impl<T: Eq + Hash> Index<SignatureId<T>> for SignatureArena<T> {
    type Output = T;

    fn index(&self, id: SignatureId<T>) -> &Self::Output {
        &self.values[id.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signatures::{FieldSignature, MethodSignature};

    #[test]
    fn equal_signatures_are_stored_once() {
        let mut arena = SignatureArena::new();
        let first: MethodSignature = "<T:Ljava/lang/Object;>(TT;)TT;".parse().unwrap();
        let second: MethodSignature = "<T:Ljava/lang/Object;>(TT;)TT;".parse().unwrap();
        let other: MethodSignature = "(I)V".parse().unwrap();
        let first_id = arena.intern(first);
        let second_id = arena.intern(second.clone());
        let other_id = arena.intern(other);
        assert_eq!(first_id, second_id);
        assert_ne!(first_id, other_id);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[first_id], second);
        assert_eq!(arena.lookup(&second), Some(first_id));
    }

    #[test]
    fn foreign_ids() {
        let mut arena = SignatureArena::new();
        let mut other = SignatureArena::new();
        let field: FieldSignature = "Ljava/util/List<TE;>;".parse().unwrap();
        other.intern("TE;".parse::<FieldSignature>().unwrap());
        let id = other.intern(field.clone());
        assert!(arena.is_empty());
        assert_eq!(arena.get(id), None);
        arena.intern(field.clone());
        assert_eq!(arena.get_shared(SignatureId::new(0)).as_deref(), Some(&field));
        assert_eq!(
            arena.iter().map(|(it, _)| it.index()).collect::<Vec<_>>(),
            vec![0]
        );
    }
}
