//! Error taxonomy for content mutations.
//!
//! `ContentFailure` covers the two recoverable business failures (field
//! validation and the featured ceiling). `MutationError` is the uniform
//! shape the executor and action runner hand to the UI.

use std::any::Any;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::content::EntityKind;

/// Which field rule rejected a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    TitleRequired,
    DescriptionTooShort,
    InvalidUrl,
}

/// Tagged failure raised by the validation and policy steps
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentFailure {
    #[error("{message}")]
    Validation {
        entity: EntityKind,
        rule: ValidationRule,
        message: String,
    },

    #[error("{message}")]
    PolicyLimit {
        entity: EntityKind,
        max: u32,
        message: String,
    },
}

impl ContentFailure {
    pub fn validation(entity: EntityKind, rule: ValidationRule, message: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            rule,
            message: message.into(),
        }
    }

    pub fn policy_limit(entity: EntityKind, max: u32) -> Self {
        Self::PolicyLimit {
            entity,
            max,
            message: format!("Only {} featured {} allowed", max, entity.plural()),
        }
    }

    /// Fixed discriminant identifying the failure category and source pipeline
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Validation {
                entity: EntityKind::Highlight,
                ..
            } => "HighlightValidationError",
            Self::Validation {
                entity: EntityKind::Project,
                ..
            } => "ProjectValidationError",
            Self::PolicyLimit {
                entity: EntityKind::Highlight,
                ..
            } => "FeaturedHighlightLimitError",
            Self::PolicyLimit {
                entity: EntityKind::Project,
                ..
            } => "FeaturedProjectLimitError",
        }
    }

    pub fn entity(&self) -> EntityKind {
        match self {
            Self::Validation { entity, .. } | Self::PolicyLimit { entity, .. } => *entity,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::PolicyLimit { message, .. } => message,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_policy_limit(&self) -> bool {
        matches!(self, Self::PolicyLimit { .. })
    }
}

/// Normalized error stored by the executor and action runner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Content(#[from] ContentFailure),

    /// Anything raised outside the validation and policy steps
    #[error("{message}")]
    Unexpected { message: String },
}

impl MutationError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Build an error from a caught panic payload
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Unexpected { message }
    }

    /// Text the UI renders verbatim
    pub fn message(&self) -> &str {
        match self {
            Self::Content(failure) => failure.message(),
            Self::Unexpected { message } => message,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Content(failure) => failure.tag(),
            Self::Unexpected { .. } => "UnexpectedError",
        }
    }

    pub fn as_content(&self) -> Option<&ContentFailure> {
        match self {
            Self::Content(failure) => Some(failure),
            Self::Unexpected { .. } => None,
        }
    }
}

impl From<anyhow::Error> for MutationError {
    fn from(error: anyhow::Error) -> Self {
        Self::unexpected(error.to_string())
    }
}
