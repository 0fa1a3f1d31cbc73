//! Featured-slot ceiling for highlights and projects.
//!
//! The check compares a count supplied by the caller against a configured
//! maximum. It never reserves a slot, so two concurrent submissions can both
//! pass; the store is expected to enforce the final invariant on write.

use serde::{Deserialize, Serialize};

use crate::domain::{ContentFailure, EntityKind};

use super::effect::Effect;

/// Default number of featured items allowed per entity kind
pub const DEFAULT_MAX_FEATURED: u32 = 6;

/// Hard ceiling on featured items of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedLimit {
    kind: EntityKind,
    max: u32,
}

impl FeaturedLimit {
    pub fn new(kind: EntityKind, max: u32) -> Self {
        Self { kind, max }
    }

    pub fn with_default_max(kind: EntityKind) -> Self {
        Self::new(kind, DEFAULT_MAX_FEATURED)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Succeed while another item may still be featured.
    ///
    /// Reaching the maximum blocks the next insertion.
    pub fn check(&self, current_featured_count: u32) -> Result<bool, ContentFailure> {
        if current_featured_count >= self.max {
            return Err(ContentFailure::policy_limit(self.kind, self.max));
        }
        Ok(true)
    }

    pub fn effect(&self, current_featured_count: u32) -> Effect<bool, ContentFailure> {
        let limit = *self;
        Effect::suspend(move || limit.check(current_featured_count))
    }
}

/// Per-kind featured maxima (loaded from config)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    #[serde(default = "default_max_featured")]
    pub max_featured_highlights: u32,

    #[serde(default = "default_max_featured")]
    pub max_featured_projects: u32,
}

fn default_max_featured() -> u32 {
    DEFAULT_MAX_FEATURED
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            max_featured_highlights: DEFAULT_MAX_FEATURED,
            max_featured_projects: DEFAULT_MAX_FEATURED,
        }
    }
}

impl PolicySettings {
    pub fn limit_for(&self, kind: EntityKind) -> FeaturedLimit {
        let max = match kind {
            EntityKind::Highlight => self.max_featured_highlights,
            EntityKind::Project => self.max_featured_projects,
        };
        FeaturedLimit::new(kind, max)
    }
}
