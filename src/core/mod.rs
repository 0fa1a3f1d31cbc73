//! Validation and mutation execution.
//!
//! This module contains:
//! - Effect: lazy, composable fallible computations
//! - Validation / Policy: field rules and the featured ceiling
//! - Pipeline: the composed validate-then-policy effect
//! - Executor / Actions: lifecycle tracking around execution
//! - Service: submission flow against a content store

pub mod actions;
pub mod effect;
pub mod executor;
pub mod pipeline;
pub mod policy;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use actions::{ActionRunner, ActionState, CommentModeration};
pub use effect::Effect;
pub use executor::{ExecutionState, MutationExecutor, Phase};
pub use pipeline::{content_pipeline, counted_featured};
pub use policy::{FeaturedLimit, PolicySettings, DEFAULT_MAX_FEATURED};
pub use service::{ContentService, Submission, Target};
pub use validation::{Validator, MIN_DESCRIPTION_CHARS};
