//! The comment synchronizer: read, merge, and write back the managed comment.
//!
//! One synchronizer invocation handles one pull request: list its comments,
//! locate the bot's own comment by sentinel and authorship, parse the section
//! map out of its body, merge the caller's items, and write the re-rendered
//! body back in full. State lives entirely in the comment body, so concurrent
//! invocations against the same pull request are a read-modify-write race;
//! callers needing stronger guarantees must serialize per pull request.

use thiserror::Error;
use tracing::{debug, info};

use crate::body::{self, ParseError};
use crate::config::SyncConfig;
use crate::store::{CommentData, CommentStore};
use crate::types::{CommentId, PrNumber, SectionItem};

/// Errors from a publish run.
#[derive(Debug, Error)]
pub enum SyncError<E> {
    /// The existing managed comment failed structural parsing.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The comment store reported a failure, passed through unmodified.
    #[error("comment store error: {0}")]
    Store(E),
}

/// What a publish run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Posting was suppressed (opted-out author or global skip switch). No
    /// store call was made; this is a deliberate no-op, not an error.
    Skipped,

    /// No managed comment existed yet; one was created.
    Created { id: CommentId },

    /// The existing managed comment was rewritten in place.
    Updated { id: CommentId },
}

/// Maintains the single managed status comment on a pull request.
pub struct CommentSynchronizer<S> {
    store: S,
    config: SyncConfig,
}

impl<S: CommentStore> CommentSynchronizer<S> {
    pub fn new(store: S, config: SyncConfig) -> CommentSynchronizer<S> {
        CommentSynchronizer { store, config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Returns the first comment authored by the bot that carries the
    /// ownership sentinel, or `None` on the first post.
    pub fn find_bot_comment<'a>(&self, comments: &'a [CommentData]) -> Option<&'a CommentData> {
        find_bot_comment(comments, &self.config.bot_login)
    }

    /// Reads the managed comment, merges `items` into its section map, and
    /// writes the re-rendered body back: a create on first post, an update
    /// addressed by the existing comment's id otherwise.
    ///
    /// Returns [`PublishOutcome::Skipped`] without touching the store when
    /// `author` is opted out or the global skip switch is set.
    ///
    /// # Errors
    ///
    /// [`SyncError::Parse`] if the existing comment is structurally corrupt;
    /// [`SyncError::Store`] for transport failures, which are propagated
    /// unmodified and never retried here.
    pub async fn publish(
        &self,
        pr: PrNumber,
        author: &str,
        items: &[SectionItem],
    ) -> Result<PublishOutcome, SyncError<S::Error>> {
        if self.config.opt_out_authors.contains(author) {
            info!(%pr, author, "skipping comment for opted-out author");
            return Ok(PublishOutcome::Skipped);
        }
        if self.config.skip_comments {
            info!(%pr, "skip switch is set, not commenting");
            return Ok(PublishOutcome::Skipped);
        }

        let comments = self
            .store
            .list_comments(pr)
            .await
            .map_err(SyncError::Store)?;
        let existing = find_bot_comment(&comments, &self.config.bot_login);

        let mut sections = body::parse_sections(existing.map(|c| c.body.as_str()))?;
        body::merge_items(&mut sections, items);
        let rendered = body::render_comment_body(&sections);

        match existing {
            None => {
                let id = self
                    .store
                    .create_comment(pr, rendered)
                    .await
                    .map_err(SyncError::Store)?;
                info!(%pr, %id, "created status comment");
                Ok(PublishOutcome::Created { id })
            }
            Some(comment) => {
                let id = comment.id;
                self.store
                    .update_comment(id, rendered)
                    .await
                    .map_err(SyncError::Store)?;
                info!(%pr, %id, "updated status comment");
                Ok(PublishOutcome::Updated { id })
            }
        }
    }
}

/// Scans `comments` for the first one authored by `bot_login` whose body
/// contains the ownership sentinel. Iteration order is the store's natural
/// order; if several qualify, the first wins.
pub fn find_bot_comment<'a>(
    comments: &'a [CommentData],
    bot_login: &str,
) -> Option<&'a CommentData> {
    let found = comments
        .iter()
        .find(|c| c.author_login == bot_login && c.body.contains(body::BOT_COMMENT_START));

    match found {
        Some(c) => debug!(id = %c.id, "found existing bot comment"),
        None => debug!("no existing bot comment found"),
    }
    found
}
