//! The managed comment's wire format: markers, parsing, merging, rendering.
//!
//! A managed comment looks like:
//!
//! ```text
//! <!---bot-comment-->
//!
//! Thanks for opening a pull request! ...
//!
//! <!--bot-comment-ci-start-->
//!  * Build passed<!--bot-comment-ci-end-->
//!
//! <sub>Generated by comment-sync</sub>
//! ```
//!
//! Each section is delimited by start/end markers carrying its key, and a
//! section signals completion in-band by embedding its key-specific done
//! marker in the content. The comment body is the only durable state: the
//! section map is reconstructed from it on every run.

pub mod format;
pub mod merge;
pub mod parse;

pub use format::render_comment_body;
pub use merge::merge_items;
pub use parse::{ParseError, parse_sections};

use crate::types::SectionKey;

/// Sentinel marking a comment as bot-owned. Appears verbatim at the top of
/// every managed comment and is how the bot finds its own comment again.
pub const BOT_COMMENT_START: &str = "<!---bot-comment-->";

/// Fixed paragraph rendered after the sentinel on every post.
pub const WELCOME_TEXT: &str = "Thanks for opening a pull request! This comment is managed by the \
     CI bot and is updated in place as checks and reminders change. Please do not edit it by hand.";

/// Fixed attribution footer.
pub const FOOTER: &str = "<sub>Generated by comment-sync</sub>";

/// The start delimiter for a section.
pub fn start_marker(key: &SectionKey) -> String {
    format!("<!--bot-comment-{key}-start-->")
}

/// The end delimiter for a section.
pub fn end_marker(key: &SectionKey) -> String {
    format!("<!--bot-comment-{key}-end-->")
}

/// The in-band marker that flags a section's content as finalized. Presence
/// is substring-checked anywhere in the content, not positionally anchored.
pub fn done_marker(key: &SectionKey) -> String {
    format!("<!--bot-item-{key}-done-->")
}
