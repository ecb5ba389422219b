//! Section extraction from a managed comment body.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{SectionItem, SectionKey, SectionMap};

use super::done_marker;

/// Matches one delimited section. `[\S\s]` instead of `.` lets content span
/// lines without a DOTALL flag, and the non-greedy middle stops adjacent
/// sections from collapsing into one match.
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--bot-comment-([a-z][a-z-]+)-start-->([\S\s]*?)<!--bot-comment-([a-z-]+)-end-->")
        .expect("section pattern is valid")
});

/// Errors from parsing a managed comment body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A start marker's key did not match the key on its end marker. The
    /// comment was corrupted (most likely hand-edited) and merging on top of
    /// it is not safe, so no partial map is returned.
    #[error("malformed comment: {start:?} start marker did not have a matching end, found {end:?} instead")]
    MismatchedMarkers { start: String, end: String },
}

/// Extracts the section map from a comment body.
///
/// `None` (no existing comment) yields an empty map - the normal first-post
/// condition. Content is trimmed and a leading bullet prefix (`*` and
/// following spaces) stripped, and `is_done` is recomputed from whether the
/// stored text carries the key's done marker. When a key appears more than
/// once in the raw text, the last occurrence's value wins but the first
/// occurrence's position is kept.
///
/// # Errors
///
/// Returns [`ParseError::MismatchedMarkers`] if any start/end key pair
/// disagrees.
pub fn parse_sections(body: Option<&str>) -> Result<SectionMap, ParseError> {
    let Some(body) = body else {
        tracing::debug!("no existing comment while searching for body items");
        return Ok(SectionMap::new());
    };

    let mut sections = SectionMap::new();
    for caps in SECTION_RE.captures_iter(body) {
        let start = &caps[1];
        let end = &caps[3];
        if start != end {
            return Err(ParseError::MismatchedMarkers {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let key = SectionKey::parse(start).expect("grammar guarantees a valid key");
        let text = caps[2].trim().trim_start_matches(['*', ' ']).to_string();
        let is_done = text.contains(&done_marker(&key));
        sections.insert(SectionItem {
            key,
            text: Some(text),
            is_done,
        });
    }

    tracing::debug!(count = sections.len(), "parsed section map from comment");
    Ok(sections)
}
