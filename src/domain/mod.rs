//! Domain types for the showcase admin core.
//!
//! This module contains the core data structures:
//! - Content: submissions, entity kinds and identifiers
//! - Errors: tagged failures and the normalized mutation error

pub mod content;
pub mod errors;

// Re-export commonly used types
pub use content::{CommentId, ContentEditInput, ContentId, EntityKind};
pub use errors::{ContentFailure, MutationError, ValidationRule};
