//! Octocrab client wrapper scoped to a specific repository.

use octocrab::Octocrab;
use serde::Serialize;

use crate::store::{CommentData, CommentStore};
use crate::types::{CommentId, PrNumber, RepoId};

/// A GitHub comment store scoped to a specific repository.
///
/// All operations performed through this client target the same repository,
/// so `CommentStore` calls only need a PR number or comment id.
#[derive(Clone)]
pub struct OctocrabClient {
    /// The underlying octocrab client.
    client: Octocrab,

    /// The repository this client is scoped to.
    repo: RepoId,
}

impl OctocrabClient {
    /// Creates a new client scoped to the given repository.
    pub fn new(client: Octocrab, repo: RepoId) -> Self {
        Self { client, repo }
    }

    /// Creates a client from a GitHub token.
    pub fn from_token(token: impl Into<String>, repo: RepoId) -> Result<Self, octocrab::Error> {
        let client = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(client, repo))
    }

    /// Returns a reference to the underlying octocrab client.
    pub fn inner(&self) -> &Octocrab {
        &self.client
    }

    /// Returns the repository this client is scoped to.
    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    fn owner(&self) -> &str {
        &self.repo.owner
    }

    fn repo_name(&self) -> &str {
        &self.repo.repo
    }
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctocrabClient")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

impl CommentStore for OctocrabClient {
    type Error = octocrab::Error;

    async fn list_comments(&self, pr: PrNumber) -> Result<Vec<CommentData>, octocrab::Error> {
        let mut page = 1u32;
        let mut all_comments = Vec::new();

        loop {
            let page_result = self
                .client
                .issues(self.owner(), self.repo_name())
                .list_comments(pr.0)
                .per_page(100)
                .page(page)
                .send()
                .await?;

            let items = page_result.items;
            let is_last_page = items.len() < 100;

            for comment in items {
                all_comments.push(CommentData {
                    id: CommentId(comment.id.into_inner()),
                    author_login: comment.user.login,
                    body: comment.body.unwrap_or_default(),
                });
            }

            if is_last_page {
                break;
            }
            page += 1;
        }

        tracing::debug!(%pr, count = all_comments.len(), "listed comments");
        Ok(all_comments)
    }

    async fn create_comment(&self, pr: PrNumber, body: String) -> Result<CommentId, octocrab::Error> {
        let comment = self
            .client
            .issues(self.owner(), self.repo_name())
            .create_comment(pr.0, body)
            .await?;

        Ok(CommentId(comment.id.into_inner()))
    }

    async fn update_comment(&self, id: CommentId, body: String) -> Result<(), octocrab::Error> {
        let url = format!(
            "/repos/{}/{}/issues/comments/{}",
            self.owner(),
            self.repo_name(),
            id.0
        );

        #[derive(Serialize)]
        struct UpdateRequest {
            body: String,
        }

        let _: serde_json::Value = self.client.patch(&url, Some(&UpdateRequest { body })).await?;
        Ok(())
    }
}
