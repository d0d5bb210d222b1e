use std::collections::HashMap;

use super::{
    errors::{MalformedSignature, MalformedSignatureKind},
    identifier::Identifier,
};

/// A forward-only view over a signature string.
///
/// All offsets taken and returned by the methods are byte offsets relative to the current
/// position. The only operation that moves the position is [`Cursor::increment`], which
/// never stops inside a multi-byte character.
/// The remaining input is never copied, so a whole signature is parsed in linear time.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    depth: usize,
    identifiers: HashMap<&'a str, Identifier>,
}

impl<'a> Cursor<'a> {
    /// The maximum number of type argument lists that can be nested in each other.
    pub const MAX_NESTING_DEPTH: usize = 128;

    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            depth: 0,
            identifiers: HashMap::new(),
        }
    }

    /// Returns the absolute offset of the cursor in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Returns the input that has not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.offset..).unwrap_or_default()
    }

    /// Checks whether the whole input has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Returns the character `k` bytes ahead of the current position.
    #[must_use]
    pub fn char_at(&self, k: usize) -> Option<char> {
        self.remaining().get(k..)?.chars().next()
    }

    /// Finds the next occurrence of `ch` at or after `from`.
    #[must_use]
    pub fn index_of(&self, ch: char, from: usize) -> Option<usize> {
        self.remaining()
            .get(from..)?
            .find(ch)
            .map(|index| index + from)
    }

    /// Returns the text between `start` and `end`.
    #[must_use]
    pub fn substring(&self, start: usize, end: usize) -> Option<&'a str> {
        self.remaining().get(start..end)
    }

    /// Advances the cursor by `n` bytes, stopping at the end of the input.
    /// If that lands inside a multi-byte character, the cursor moves on to the end of it.
    pub fn increment(&mut self, n: usize) {
        let mut offset = self.input.len().min(self.offset.saturating_add(n));
        while !self.input.is_char_boundary(offset) {
            offset += 1;
        }
        self.offset = offset;
    }

    /// Enters a nested type argument list, failing if it is nested too deeply.
    pub(crate) fn enter_nested(&mut self) -> Result<(), MalformedSignature> {
        if self.depth >= Self::MAX_NESTING_DEPTH {
            return Err(self.error(MalformedSignatureKind::NestedTooDeeply {
                limit: Self::MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the length of the identifier starting `from` bytes ahead.
    /// An identifier extends up to, but not including, the next character that is not allowed
    /// in an identifier (`.`, `;`, `[`, `/`, `<`, `>` or `:`).
    pub(crate) fn identifier_len(&self, from: usize) -> usize {
        self.remaining().get(from..).map_or(0, |rest| {
            rest.find(|c| matches!(c, '.' | ';' | '[' | '/' | '<' | '>' | ':'))
                .unwrap_or(rest.len())
        })
    }

    /// Consumes an identifier and returns it.
    /// Repeated names share storage with the first occurrence.
    pub(crate) fn take_identifier(
        &mut self,
        production: &'static str,
    ) -> Result<Identifier, MalformedSignature> {
        let len = self.identifier_len(0);
        let Some(name) = self.substring(0, len).filter(|it| !it.is_empty()) else {
            return Err(self.error(MalformedSignatureKind::EmptyIdentifier { production }));
        };
        let identifier = self
            .identifiers
            .entry(name)
            .or_insert_with(|| Identifier::new(name))
            .clone();
        self.increment(len);
        Ok(identifier)
    }

    /// Consumes `expected` if it is the next character.
    pub(crate) fn consume(&mut self, expected: char) -> bool {
        if self.char_at(0) == Some(expected) {
            self.increment(expected.len_utf8());
            true
        } else {
            false
        }
    }

    /// Consumes `expected`, or fails without moving if the next character is something else.
    pub(crate) fn expect(
        &mut self,
        expected: char,
        description: &'static str,
    ) -> Result<(), MalformedSignature> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.unexpected(description))
        }
    }

    /// Creates an error describing the next character as unexpected.
    pub(crate) fn unexpected(&self, expected: &'static str) -> MalformedSignature {
        let kind = match self.char_at(0) {
            Some(found) => MalformedSignatureKind::UnexpectedChar { expected, found },
            None => MalformedSignatureKind::UnexpectedEnd { expected },
        };
        self.error(kind)
    }

    pub(crate) const fn error(&self, kind: MalformedSignatureKind) -> MalformedSignature {
        MalformedSignature {
            position: self.offset,
            kind,
        }
    }
}
