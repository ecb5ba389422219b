//! Shared proptest strategies for the section domain model.

use proptest::prelude::*;

use crate::body::done_marker;
use crate::types::{SectionItem, SectionKey, SectionMap};

pub fn arb_section_key() -> impl Strategy<Value = SectionKey> {
    "[a-z][a-z-]{1,15}".prop_map(|s| SectionKey::parse(s).unwrap())
}

/// Section text that cannot collide with the marker grammar: no angle
/// brackets, non-blank, and already trimmed.
pub fn arb_section_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!]{1,60}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("text must be non-blank", |s| !s.is_empty())
}

/// An item with content; roughly half carry their key's done marker.
pub fn arb_section_item() -> impl Strategy<Value = SectionItem> {
    (arb_section_key(), arb_section_text(), any::<bool>()).prop_map(|(key, text, done)| {
        let text = if done {
            format!("{} {}", text, done_marker(&key))
        } else {
            text
        };
        SectionItem::new(key, text)
    })
}

pub fn arb_section_map() -> impl Strategy<Value = SectionMap> {
    prop::collection::vec(arb_section_item(), 0..6).prop_map(|items| {
        let mut map = SectionMap::new();
        for item in items {
            map.insert(item);
        }
        map
    })
}
