//! The external comment store collaborator.
//!
//! The synchronizer is generic over [`CommentStore`]; production code plugs
//! in the octocrab-backed implementation from [`crate::github`], and tests
//! plug in mocks that record calls.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::types::{CommentId, PrNumber};

/// One comment as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentData {
    /// The comment's unique database id.
    pub id: CommentId,
    /// Login of the comment's author.
    pub author_login: String,
    /// The full comment body.
    pub body: String,
}

/// Read/write access to a pull request's comment thread.
///
/// Failures are the implementation's own error type and are passed through
/// to the caller unmodified: no retry or backoff happens at this layer, and a
/// write either fully succeeds or fails.
pub trait CommentStore {
    /// The error type returned by this store.
    type Error;

    /// Lists all comments on a pull request, in the store's natural order.
    fn list_comments(
        &self,
        pr: PrNumber,
    ) -> impl Future<Output = Result<Vec<CommentData>, Self::Error>> + Send;

    /// Posts a new comment and returns its id.
    fn create_comment(
        &self,
        pr: PrNumber,
        body: String,
    ) -> impl Future<Output = Result<CommentId, Self::Error>> + Send;

    /// Replaces the body of an existing comment.
    fn update_comment(
        &self,
        id: CommentId,
        body: String,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
