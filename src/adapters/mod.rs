//! Adapter interfaces for external collaborators.
//!
//! The core never talks to storage directly. Callers pass it a featured
//! count and hand validated input back to a [`ContentStore`]; comment
//! moderation goes through a [`CommentModerator`].

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{CommentId, ContentEditInput, ContentId, EntityKind};

// Re-export the in-memory adapter
pub use memory::{CommentStatus, MemoryStore, StoredContent};

/// Persistence layer for highlights and projects
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Number of featured items of `kind`, not counting `exclude`
    async fn featured_count(&self, kind: EntityKind, exclude: Option<&ContentId>) -> Result<u32>;

    /// Insert a new item and return its id
    async fn create(&self, kind: EntityKind, input: ContentEditInput) -> Result<ContentId>;

    /// Replace the fields of an existing item
    async fn update(&self, kind: EntityKind, id: &ContentId, input: ContentEditInput) -> Result<()>;
}

/// Moderation backend for visitor comments
#[async_trait]
pub trait CommentModerator: Send + Sync {
    async fn approve(&self, id: &CommentId) -> Result<()>;

    async fn reject(&self, id: &CommentId) -> Result<()>;
}
