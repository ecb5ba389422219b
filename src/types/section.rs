//! Section keys, items, and the insertion-ordered section map.
//!
//! A section is a keyed, independently updatable sub-block of the managed
//! comment. The map's iteration order is an observable contract: it is the
//! order sections appear in the rendered comment.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::body;

/// Error returned when a section key fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid section key {key:?}: {reason}")]
pub struct InvalidKey {
    pub key: String,
    pub reason: &'static str,
}

/// A section key: lowercase ASCII letters and hyphens, starting with a
/// letter, at least two characters long (the parse grammar is `[a-z][a-z-]+`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    /// Validates and wraps a section key.
    pub fn parse(s: impl Into<String>) -> Result<SectionKey, InvalidKey> {
        let s = s.into();
        match s.chars().next() {
            None => {
                return Err(InvalidKey {
                    key: s,
                    reason: "key is empty",
                });
            }
            Some(c) if !c.is_ascii_lowercase() => {
                return Err(InvalidKey {
                    key: s,
                    reason: "key must start with a lowercase letter",
                });
            }
            Some(_) => {}
        }
        if s.len() < 2 {
            return Err(InvalidKey {
                key: s,
                reason: "key must be at least two characters",
            });
        }
        if !s.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
            return Err(InvalidKey {
                key: s,
                reason: "key may only contain lowercase letters and hyphens",
            });
        }
        Ok(SectionKey(s))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One keyed section of the managed comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionItem {
    pub key: SectionKey,

    /// The section's rendered content. `None` means the key exists in the
    /// map without producing any visible output.
    pub text: Option<String>,

    /// Whether the section is finalized. Derived from the done marker in the
    /// text when parsing; caller-supplied on update items.
    pub is_done: bool,
}

impl SectionItem {
    /// Creates an item with the given text, deriving `is_done` from whether
    /// the text carries the key's done marker.
    pub fn new(key: SectionKey, text: impl Into<String>) -> SectionItem {
        let text = text.into();
        let is_done = text.contains(&body::done_marker(&key));
        SectionItem {
            key,
            text: Some(text),
            is_done,
        }
    }

    /// Creates an item with no content.
    pub fn empty(key: SectionKey) -> SectionItem {
        SectionItem {
            key,
            text: None,
            is_done: false,
        }
    }
}

/// Insertion-order-preserving map from section key to item.
///
/// Re-inserting an existing key replaces the item without moving it, so
/// pre-existing sections keep their original relative order in the rendered
/// comment and brand-new keys append at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(SectionKey, SectionItem)>,
}

impl SectionMap {
    pub fn new() -> SectionMap {
        SectionMap::default()
    }

    /// Inserts or replaces the entry for the item's key. A replaced entry
    /// keeps its original position.
    pub fn insert(&mut self, item: SectionItem) {
        match self.entries.iter_mut().find(|(k, _)| *k == item.key) {
            Some((_, slot)) => *slot = item,
            None => self.entries.push((item.key.clone(), item)),
        }
    }

    pub fn get(&self, key: &SectionKey) -> Option<&SectionItem> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, item)| item)
    }

    pub fn contains_key(&self, key: &SectionKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the section exists and its content carries the done
    /// marker. Unknown keys are not done.
    pub fn is_done(&self, key: &SectionKey) -> bool {
        self.get(key).map(|item| item.is_done).unwrap_or(false)
    }

    /// Iterates items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionItem> {
        self.entries.iter().map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
