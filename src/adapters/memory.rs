//! In-memory store for tests and local development.
//!
//! Holds content and comments in process memory only. Writes do not
//! re-check the featured ceiling.

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{CommentId, ContentEditInput, ContentId, EntityKind};

use super::{CommentModerator, ContentStore};

/// A stored highlight or project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredContent {
    pub id: ContentId,
    pub kind: EntityKind,
    pub input: ContentEditInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Moderation status of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RwLock<HashMap<ContentId, StoredContent>>,
    comments: RwLock<HashMap<CommentId, CommentStatus>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `count` featured items of `kind`
    pub async fn seed_featured(&self, kind: EntityKind, count: u32) -> Result<()> {
        for n in 0..count {
            let input = ContentEditInput::new(
                format!("Seeded {} {}", kind, n + 1),
                "Seeded item used to occupy a featured slot.",
            )
            .featured(true);
            self.create(kind, input).await?;
        }
        Ok(())
    }

    pub async fn get(&self, id: &ContentId) -> Option<StoredContent> {
        self.content.read().await.get(id).cloned()
    }

    pub async fn count(&self, kind: EntityKind) -> usize {
        self.content
            .read()
            .await
            .values()
            .filter(|item| item.kind == kind)
            .count()
    }

    /// Register a comment awaiting moderation
    pub async fn add_comment(&self, id: impl Into<CommentId>) {
        self.comments
            .write()
            .await
            .insert(id.into(), CommentStatus::Pending);
    }

    pub async fn comment_status(&self, id: &CommentId) -> Option<CommentStatus> {
        self.comments.read().await.get(id).copied()
    }

    async fn set_comment_status(&self, id: &CommentId, status: CommentStatus) -> Result<()> {
        let mut comments = self.comments.write().await;
        match comments.get_mut(id) {
            Some(current) => {
                *current = status;
                Ok(())
            }
            None => bail!("Comment {} not found", id),
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn featured_count(&self, kind: EntityKind, exclude: Option<&ContentId>) -> Result<u32> {
        let content = self.content.read().await;
        let count = content
            .values()
            .filter(|item| item.kind == kind && item.input.featured)
            .filter(|item| Some(&item.id) != exclude)
            .count();
        Ok(u32::try_from(count)?)
    }

    async fn create(&self, kind: EntityKind, input: ContentEditInput) -> Result<ContentId> {
        let id = ContentId::from(Uuid::new_v4().to_string());
        let now = Utc::now();
        let item = StoredContent {
            id: id.clone(),
            kind,
            input,
            created_at: now,
            updated_at: now,
        };
        self.content.write().await.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(&self, kind: EntityKind, id: &ContentId, input: ContentEditInput) -> Result<()> {
        let mut content = self.content.write().await;
        match content.get_mut(id) {
            Some(item) if item.kind == kind => {
                item.input = input;
                item.updated_at = Utc::now();
                Ok(())
            }
            Some(item) => bail!("Item {} is a {}, not a {}", id, item.kind, kind),
            None => bail!("{} {} not found", kind, id),
        }
    }
}

#[async_trait]
impl CommentModerator for MemoryStore {
    async fn approve(&self, id: &CommentId) -> Result<()> {
        self.set_comment_status(id, CommentStatus::Approved).await
    }

    async fn reject(&self, id: &CommentId) -> Result<()> {
        self.set_comment_status(id, CommentStatus::Rejected).await
    }
}
