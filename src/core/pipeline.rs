//! The validate-then-policy pipeline for a single submission.

use crate::domain::{ContentEditInput, ContentFailure, EntityKind};

use super::effect::Effect;
use super::policy::FeaturedLimit;
use super::validation::Validator;

/// Featured count the ceiling is checked against.
///
/// Only a featured submission takes a slot, so anything else checks against 0.
pub fn counted_featured(input: &ContentEditInput, stored_featured_count: u32) -> u32 {
    if input.featured {
        stored_featured_count
    } else {
        0
    }
}

/// Build the deferred pipeline for one submission:
/// `succeed(input) -> validate -> featured limit -> succeed(input)`.
///
/// `current_featured_count` must come from the store before the pipeline is
/// built; nothing here queries storage.
pub fn content_pipeline(
    kind: EntityKind,
    input: ContentEditInput,
    current_featured_count: u32,
    limit: FeaturedLimit,
) -> Effect<ContentEditInput, ContentFailure> {
    let validator = Validator::new(kind);

    Effect::succeed(input)
        .and_then(move |input| validator.effect(input))
        .and_then(move |validated| {
            limit
                .effect(current_featured_count)
                .map(move |_| validated.clone())
        })
}
