//! showcase - validation and mutation execution core
//!
//! The admin area of the portfolio site edits two kinds of content,
//! highlights and projects. This crate holds the part of that flow with
//! business rules in it.
//!
//! # Architecture
//!
//! Every edit is described as a lazy [`Effect`]:
//! - Field rules reject empty titles, short descriptions and bad URLs
//! - A featured-limit policy caps how many items of a kind are featured
//! - A [`MutationExecutor`] runs the effect and tracks
//!   idle / running / succeeded / failed state
//! - An [`ActionRunner`] does the same for single calls such as comment
//!   approval, without a validation pipeline
//!
//! Storage stays behind the [`ContentStore`] and [`CommentModerator`]
//! traits; the core receives counts and hands back validated input.
//!
//! # Modules
//!
//! - `adapters`: Collaborator traits and an in-memory store
//! - `core`: Effect, rules, policy, executor, actions, service
//! - `domain`: Submissions, entity kinds, error taxonomy
//! - `config`: Featured-limit configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Dry-run a submission against the rules
//! showcase check --kind project --input submission.yaml --featured-count 5
//!
//! # Show the resolved featured limits
//! showcase config
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::adapters::{CommentModerator, ContentStore, MemoryStore};
pub use crate::core::{
    content_pipeline, ActionRunner, ActionState, CommentModeration, ContentService, Effect,
    ExecutionState, FeaturedLimit, MutationExecutor, Phase, PolicySettings, Target, Validator,
};
pub use crate::domain::{
    CommentId, ContentEditInput, ContentFailure, ContentId, EntityKind, MutationError,
    ValidationRule,
};
