//! Identifier-interning table.
//!
//! Maps token text to `Id`s and back. The table is pre-populated with every
//! built-in key; identifiers and literals get fresh keys as they are
//! inserted. Lookups take a short read lock, so one table can be shared by
//! any number of concurrent parses.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::token::{BuiltIn, Id, IdFlags, Key, Token};

#[cfg(test)]
mod tests;

/// Error when inserting text into a `TokenMap` fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenMapError {
    #[error("cannot intern empty token text")]
    Empty,
    #[error("{0:?} is not an identifier, literal or built-in token")]
    Unrecognized(String),
    #[error("token map exceeded capacity: {0} keys")]
    Overflow(usize),
}

struct Inner {
    by_text: FxHashMap<&'static str, Id>,
    /// Text of every key, indexed by key. Index 0 is the empty string.
    by_key: Vec<&'static str>,
}

/// Thread-safe interning table for token text.
pub struct TokenMap {
    inner: RwLock<Inner>,
}

impl TokenMap {
    /// Create a table holding only the built-in keys.
    pub fn new() -> Self {
        let mut by_text = FxHashMap::default();
        let mut by_key = Vec::with_capacity(Key::BUILT_IN_COUNT as usize + 256);
        by_key.push("");
        for b in BuiltIn::all() {
            by_text.insert(b.text(), b.id());
            by_key.push(b.text());
        }
        TokenMap {
            inner: RwLock::new(Inner { by_text, by_key }),
        }
    }

    /// Intern `text`, returning its `Id`.
    ///
    /// Built-in text resolves to the built-in id. New text is classified:
    /// a leading digit makes a numeric literal, surrounding double quotes a
    /// string literal, and `[A-Za-z_][A-Za-z0-9_]*` an identifier.
    pub fn insert(&self, text: &str) -> Result<Id, TokenMapError> {
        if let Some(&id) = self.inner.read().by_text.get(text) {
            return Ok(id);
        }
        let flags = classify(text)?;

        let mut guard = self.inner.write();
        // Double-check after acquiring the write lock.
        if let Some(&id) = guard.by_text.get(text) {
            return Ok(id);
        }
        let raw = u32::try_from(guard.by_key.len())
            .ok()
            .filter(|&raw| raw <= Key::MAX)
            .ok_or(TokenMapError::Overflow(guard.by_key.len()))?;
        let id = Id::new(Key::from_raw(raw), flags);

        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        guard.by_key.push(leaked);
        guard.by_text.insert(leaked, id);
        Ok(id)
    }

    /// Look up the id of already-interned text.
    pub fn get(&self, text: &str) -> Option<Id> {
        self.inner.read().by_text.get(text).copied()
    }

    /// Text of a key, or the empty string for unknown keys.
    pub fn by_key(&self, key: Key) -> &'static str {
        self.inner
            .read()
            .by_key
            .get(key.raw() as usize)
            .copied()
            .unwrap_or("")
    }

    /// Text of an id.
    #[inline]
    pub fn by_id(&self, id: Id) -> &'static str {
        self.by_key(id.key())
    }

    /// Text of a token.
    #[inline]
    pub fn by_token(&self, token: Token) -> &'static str {
        self.by_key(token.key())
    }

    /// Number of keys, built-ins included.
    pub fn len(&self) -> usize {
        self.inner.read().by_key.len()
    }

    /// Always false: a table holds at least the built-ins.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for TokenMap {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(text: &str) -> Result<IdFlags, TokenMapError> {
    let Some(first) = text.bytes().next() else {
        return Err(TokenMapError::Empty);
    };
    if first.is_ascii_digit() {
        if text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Ok(IdFlags::LITERAL | IdFlags::NUM_LITERAL);
        }
    } else if first == b'"' {
        if text.len() >= 2 && text.ends_with('"') {
            return Ok(IdFlags::LITERAL | IdFlags::STR_LITERAL);
        }
    } else if (first.is_ascii_alphabetic() || first == b'_')
        && text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Ok(IdFlags::IDENT);
    }
    Err(TokenMapError::Unrecognized(text.to_owned()))
}
