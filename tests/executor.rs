//! Mutation Executor Integration Tests
//!
//! Tests for the idle/running/succeeded/failed lifecycle and error
//! normalization at the executor boundary.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

use showcase::{
    content_pipeline, ContentEditInput, ContentFailure, Effect, EntityKind, FeaturedLimit,
    MutationError, MutationExecutor, Phase,
};

/// Effect that blocks until `gate` is notified, then yields `value`
fn gated(gate: &Arc<Notify>, value: &'static str) -> Effect<String, MutationError> {
    let gate = Arc::clone(gate);
    Effect::from_future(move || {
        let gate = Arc::clone(&gate);
        async move {
            gate.notified().await;
            Ok(value.to_string())
        }
    })
}

#[tokio::test]
async fn test_success_transitions() {
    let gate = Arc::new(Notify::new());
    let executor = Arc::new(MutationExecutor::new("gated", gated(&gate, "saved")));
    let mut states = executor.subscribe();

    assert_eq!(executor.state().phase(), Phase::Idle);

    let task = {
        let executor = Arc::clone(&executor);
        tokio::spawn(async move { executor.execute().await })
    };

    // Running while the effect is suspended
    states.changed().await.unwrap();
    {
        let running = states.borrow_and_update();
        assert!(running.is_loading);
        assert!(!running.is_success);
        assert!(running.error.is_none());
    }

    gate.notify_one();
    let value = task.await.unwrap();

    assert_eq!(value.as_deref(), Some("saved"));
    let state = executor.state();
    assert!(!state.is_loading);
    assert!(state.is_success);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_failure_returns_none_and_stores_error() {
    let pipeline = content_pipeline(
        EntityKind::Project,
        ContentEditInput::new("Title", "short"),
        0,
        FeaturedLimit::with_default_max(EntityKind::Project),
    );
    let executor = MutationExecutor::new("create_project", pipeline);

    assert_eq!(executor.execute().await, None);

    let state = executor.state();
    assert!(!state.is_loading);
    assert!(!state.is_success);
    assert_eq!(state.phase(), Phase::Failed);

    let error = state.error.unwrap();
    assert_eq!(error.message(), "Description must be at least 20 characters");
    assert_eq!(error.tag(), "ProjectValidationError");
    assert!(matches!(
        error.as_content(),
        Some(ContentFailure::Validation { .. })
    ));
}

#[tokio::test]
async fn test_policy_failure_reaches_executor_state() {
    let input = ContentEditInput::new("Valid Title", "This description is long enough.")
        .with_href("https://example.com");
    let pipeline = content_pipeline(
        EntityKind::Highlight,
        input,
        6,
        FeaturedLimit::new(EntityKind::Highlight, 6),
    );
    let executor = MutationExecutor::new("create_highlight", pipeline);

    assert!(executor.execute().await.is_none());

    let error = executor.error().unwrap();
    assert!(error.message().contains('6'));
    assert!(error.as_content().unwrap().is_policy_limit());
}

#[tokio::test]
async fn test_execute_clears_previous_result() {
    let should_fail = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&should_fail);
    let effect = Effect::<u32, MutationError>::suspend(move || {
        if flag.load(Ordering::SeqCst) {
            Err(MutationError::unexpected("store unavailable"))
        } else {
            Ok(1)
        }
    });
    let executor = MutationExecutor::new("flaky", effect);

    assert_eq!(executor.execute().await, None);
    assert_eq!(executor.state().phase(), Phase::Failed);

    should_fail.store(false, Ordering::SeqCst);
    assert_eq!(executor.execute().await, Some(1));

    let state = executor.state();
    assert!(state.error.is_none());
    assert!(state.is_success);

    should_fail.store(true, Ordering::SeqCst);
    assert_eq!(executor.execute().await, None);
    assert!(!executor.is_success());
}

#[tokio::test]
async fn test_rerun_reexecutes_effect() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let effect = Effect::<usize, MutationError>::suspend(move || {
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    });
    let executor = MutationExecutor::new("counting", effect);

    assert_eq!(executor.execute().await, Some(1));
    assert_eq!(executor.execute().await, Some(2));
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_overlapping_calls_last_finisher_wins() {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let effect = {
        let gate = Arc::clone(&gate);
        let calls = Arc::clone(&calls);
        Effect::<u32, MutationError>::from_future(move || {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            let gate = Arc::clone(&gate);
            async move {
                if call == 0 {
                    gate.notified().await;
                    Err(MutationError::unexpected("first call failed late"))
                } else {
                    Ok(2)
                }
            }
        })
    };
    let executor = Arc::new(MutationExecutor::new("overlap", effect));
    let mut states = executor.subscribe();

    let first = {
        let executor = Arc::clone(&executor);
        tokio::spawn(async move { executor.execute().await })
    };
    states.changed().await.unwrap();

    // Second call completes while the first is still suspended
    assert_eq!(executor.execute().await, Some(2));
    assert_eq!(executor.state().phase(), Phase::Succeeded);

    gate.notify_one();
    assert_eq!(first.await.unwrap(), None);

    let state = executor.state();
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(
        state.error,
        Some(MutationError::unexpected("first call failed late"))
    );
}

#[tokio::test]
async fn test_independent_executors_do_not_share_state() {
    let ok = MutationExecutor::new("ok", Effect::<u8, ContentFailure>::succeed(1));
    let failing = MutationExecutor::new(
        "failing",
        Effect::<u8, ContentFailure>::fail(ContentFailure::policy_limit(EntityKind::Project, 6)),
    );

    ok.execute().await;
    failing.execute().await;

    assert_eq!(ok.state().phase(), Phase::Succeeded);
    assert_eq!(failing.state().phase(), Phase::Failed);
}
