//! Synchronizer configuration.

use std::collections::HashSet;

/// Configuration for the comment synchronizer.
///
/// Opt-out and skip state are explicit values fixed at construction rather
/// than process-global mutable state, so two synchronizers in one process can
/// disagree without interfering.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Login of the bot identity that authors the managed comment.
    pub bot_login: String,

    /// Authors whose pull requests never receive the managed comment.
    pub opt_out_authors: HashSet<String>,

    /// Globally suppresses all posting when set.
    pub skip_comments: bool,
}

impl SyncConfig {
    pub fn new(bot_login: impl Into<String>) -> SyncConfig {
        SyncConfig {
            bot_login: bot_login.into(),
            opt_out_authors: HashSet::new(),
            skip_comments: false,
        }
    }

    /// Adds authors to the opt-out set.
    pub fn with_opt_out<I, S>(mut self, authors: I) -> SyncConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opt_out_authors
            .extend(authors.into_iter().map(Into::into));
        self
    }

    /// Sets the global skip switch.
    pub fn with_skip_comments(mut self, skip: bool) -> SyncConfig {
        self.skip_comments = skip;
        self
    }

    /// Reads the global skip switch from the `SKIP_COMMENT` environment
    /// variable (`"1"` suppresses posting).
    pub fn skip_comments_from_env() -> bool {
        std::env::var("SKIP_COMMENT").as_deref() == Ok("1")
    }
}
