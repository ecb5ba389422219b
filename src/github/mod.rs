//! Octocrab-backed comment store.
//!
//! Wraps an `Octocrab` instance scoped to a single repository and implements
//! the `CommentStore` trait against the GitHub REST API. Errors come back as
//! plain `octocrab::Error`: retry policy, if any, belongs to the caller.

mod client;

pub use client::OctocrabClient;
