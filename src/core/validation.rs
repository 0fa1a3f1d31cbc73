//! Field rules for highlight and project submissions.
//!
//! Rules run in a fixed order and the first violation wins:
//! title, then description length, then the optional URL.

use url::Url;

use crate::domain::{ContentEditInput, ContentFailure, EntityKind, ValidationRule};

use super::effect::Effect;

/// Minimum description length, counted in characters
pub const MIN_DESCRIPTION_CHARS: usize = 20;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_URL: &str = "Invalid URL";

/// Message for [`ValidationRule::DescriptionTooShort`]
pub fn description_too_short() -> String {
    format!(
        "Description must be at least {} characters",
        MIN_DESCRIPTION_CHARS
    )
}

/// Validation rules bound to one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    kind: EntityKind,
}

impl Validator {
    pub fn new(kind: EntityKind) -> Self {
        Self { kind }
    }

    pub fn highlight() -> Self {
        Self::new(EntityKind::Highlight)
    }

    pub fn project() -> Self {
        Self::new(EntityKind::Project)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Return the input unchanged, or the first rule it breaks
    pub fn validate(&self, input: &ContentEditInput) -> Result<ContentEditInput, ContentFailure> {
        if input.title.trim().is_empty() {
            return Err(self.failure(ValidationRule::TitleRequired, TITLE_REQUIRED));
        }

        if input.description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(self.failure(
                ValidationRule::DescriptionTooShort,
                description_too_short(),
            ));
        }

        if let Some(href) = input.href() {
            if !is_absolute_url(href) {
                return Err(self.failure(ValidationRule::InvalidUrl, INVALID_URL));
            }
        }

        Ok(input.clone())
    }

    /// Deferred form of [`Validator::validate`]
    pub fn effect(&self, input: ContentEditInput) -> Effect<ContentEditInput, ContentFailure> {
        let validator = *self;
        Effect::suspend(move || validator.validate(&input))
    }

    fn failure(&self, rule: ValidationRule, message: impl Into<String>) -> ContentFailure {
        ContentFailure::validation(self.kind, rule, message)
    }
}

/// `Url::parse` only accepts absolute URLs; relative input fails with
/// `RelativeUrlWithoutBase`.
fn is_absolute_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContentEditInput {
        ContentEditInput::new("Valid Title", "This description is long enough.")
    }

    #[test]
    fn test_valid_input_is_returned_unchanged() {
        let input = valid().with_href("https://example.com").featured(true);
        assert_eq!(Validator::highlight().validate(&input), Ok(input));
    }

    #[test]
    fn test_whitespace_title_is_rejected() {
        let input = ContentEditInput {
            title: " \t\n".to_string(),
            ..valid()
        };
        let err = Validator::project().validate(&input).unwrap_err();

        assert_eq!(err.message(), TITLE_REQUIRED);
        assert_eq!(err.entity(), EntityKind::Project);
    }

    #[test]
    fn test_description_length_counts_characters() {
        // 19 multi-byte characters: more than 20 bytes, still too short
        let input = ContentEditInput {
            description: "é".repeat(19),
            ..valid()
        };
        assert!(Validator::highlight().validate(&input).is_err());

        let input = ContentEditInput {
            description: "é".repeat(20),
            ..valid()
        };
        assert!(Validator::highlight().validate(&input).is_ok());
    }

    #[test]
    fn test_short_description_message_names_minimum() {
        let input = ContentEditInput {
            description: "d".repeat(MIN_DESCRIPTION_CHARS - 1),
            ..valid()
        };
        let err = Validator::project().validate(&input).unwrap_err();

        assert_eq!(err.message(), description_too_short());
        assert!(err
            .message()
            .contains(&format!("at least {} characters", MIN_DESCRIPTION_CHARS)));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let input = valid().with_href("/projects/one");
        let err = Validator::highlight().validate(&input).unwrap_err();

        assert!(matches!(
            err,
            ContentFailure::Validation {
                rule: ValidationRule::InvalidUrl,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_href_counts_as_absent() {
        let input = valid().with_href("");
        assert!(Validator::project().validate(&input).is_ok());
    }

    #[tokio::test]
    async fn test_effect_defers_validation() {
        let effect = Validator::highlight().effect(ContentEditInput::new("", ""));
        let first = effect.run().await.unwrap_err();
        let second = effect.run().await.unwrap_err();
        assert_eq!(first, second);
    }
}
