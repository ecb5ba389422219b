//! Core domain types for the comment synchronizer.

pub mod ids;
pub mod section;

// Re-export commonly used types at the module level
pub use ids::{CommentId, PrNumber, RepoId};
pub use section::{InvalidKey, SectionItem, SectionKey, SectionMap};
