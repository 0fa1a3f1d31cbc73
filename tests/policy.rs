//! Featured Limit Integration Tests
//!
//! Tests for the featured-slot ceiling and its configuration.

use showcase::core::DEFAULT_MAX_FEATURED;
use showcase::{ContentFailure, EntityKind, FeaturedLimit, PolicySettings};

#[test]
fn test_counts_below_max_succeed_with_true() {
    for max in [1, 2, 6, 10] {
        let limit = FeaturedLimit::new(EntityKind::Highlight, max);
        for current in 0..max {
            assert_eq!(limit.check(current), Ok(true), "{} < {}", current, max);
        }
    }
}

#[test]
fn test_counts_at_or_above_max_fail() {
    for max in [1, 2, 6, 10] {
        let limit = FeaturedLimit::new(EntityKind::Project, max);
        for current in max..max + 5 {
            assert!(limit.check(current).is_err(), "{} >= {}", current, max);
        }
    }
}

#[test]
fn test_boundary_cases() {
    let limit = FeaturedLimit::with_default_max(EntityKind::Highlight);

    // max - 1 passes
    assert_eq!(limit.check(DEFAULT_MAX_FEATURED - 1), Ok(true));

    // max fails
    let result = limit.check(DEFAULT_MAX_FEATURED);
    match result {
        Err(ContentFailure::PolicyLimit { entity, max, message }) => {
            assert_eq!(entity, EntityKind::Highlight);
            assert_eq!(max, 6);
            assert_eq!(message, "Only 6 featured highlights allowed");
        }
        _ => panic!("Expected PolicyLimit failure"),
    }
}

#[test]
fn test_message_wording_by_kind() {
    let highlight = FeaturedLimit::new(EntityKind::Highlight, 3).check(3).unwrap_err();
    let project = FeaturedLimit::new(EntityKind::Project, 4).check(9).unwrap_err();

    assert_eq!(highlight.message(), "Only 3 featured highlights allowed");
    assert_eq!(project.message(), "Only 4 featured projects allowed");
    assert_eq!(highlight.tag(), "FeaturedHighlightLimitError");
    assert_eq!(project.tag(), "FeaturedProjectLimitError");
}

#[test]
fn test_check_does_not_reserve_slots() {
    let limit = FeaturedLimit::new(EntityKind::Project, 1);

    // Two concurrent checks against the same count both pass
    assert!(limit.check(0).is_ok());
    assert!(limit.check(0).is_ok());
}

#[tokio::test]
async fn test_policy_effect_reruns() {
    let effect = FeaturedLimit::new(EntityKind::Highlight, 2).effect(2);

    let first = effect.run().await.unwrap_err();
    let second = effect.run().await.unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_policy_settings_yaml_parsing() {
    let yaml = r#"
max_featured_highlights: 3
max_featured_projects: 9
"#;

    let settings: PolicySettings = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(settings.limit_for(EntityKind::Highlight).max(), 3);
    assert_eq!(settings.limit_for(EntityKind::Project).max(), 9);
}

#[test]
fn test_policy_settings_default_values() {
    let settings = PolicySettings::default();

    assert_eq!(settings.max_featured_highlights, 6);
    assert_eq!(settings.max_featured_projects, 6);
}
