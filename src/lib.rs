//! Comment Sync - keeps a CI bot's status comment on a pull request current.
//!
//! The bot owns at most one comment per pull request, identified by a fixed
//! sentinel marker and the bot's own authorship. The comment body is the
//! durable state: keyed sections are parsed back out of it on every run,
//! merged with freshly supplied items, and the whole body is rewritten in a
//! single create or update call.

pub mod body;
pub mod config;
pub mod github;
pub mod store;
pub mod sync;
pub mod types;

#[cfg(test)]
pub mod test_utils;
