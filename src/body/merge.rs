//! Merge policy for caller-supplied section updates.

use crate::types::{SectionItem, SectionMap};

/// Merges `items` into `sections`.
///
/// An item with absent or blank text is an explicit "leave this key alone"
/// signal and is skipped. Anything else replaces (or inserts) the entry for
/// its key with the trimmed text. Done sections get no special protection:
/// last write wins per key, and whether a section stays done depends on
/// whether the replacement text still carries the done marker.
pub fn merge_items(sections: &mut SectionMap, items: &[SectionItem]) {
    for item in items {
        let text = match item.text.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => {
                tracing::debug!(key = %item.key, "skipping update item with empty text");
                continue;
            }
        };

        tracing::debug!(key = %item.key, "updating section");
        sections.insert(SectionItem {
            key: item.key.clone(),
            text: Some(text.to_string()),
            is_done: item.is_done,
        });
    }
}
