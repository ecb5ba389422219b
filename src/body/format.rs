//! Rendering the managed comment body.

use crate::types::SectionMap;

use super::{BOT_COMMENT_START, FOOTER, WELCOME_TEXT, end_marker, start_marker};

/// Renders the full comment body for a section map.
///
/// Layout: ownership sentinel, blank line, welcome paragraph, blank line, one
/// bullet line per section wrapped in that key's start/end markers (map
/// order, i.e. insertion order), then the attribution footer. Entries with no
/// text are silently omitted.
pub fn render_comment_body(sections: &SectionMap) -> String {
    let mut comment = format!("{BOT_COMMENT_START}\n\n{WELCOME_TEXT}\n\n");

    for item in sections.iter() {
        let Some(text) = &item.text else {
            continue;
        };
        comment.push_str(&start_marker(&item.key));
        comment.push_str("\n * ");
        comment.push_str(text.trim());
        comment.push_str(&end_marker(&item.key));
    }

    comment.push_str("\n\n");
    comment.push_str(FOOTER);
    comment
}
