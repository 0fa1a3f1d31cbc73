//! Mutation executor: runs one bound effect and tracks its lifecycle.
//!
//! State moves idle -> running -> succeeded | failed, and back to running on
//! the next `execute()`. Every failure, including a panic inside the effect,
//! ends up in `ExecutionState::error`; nothing escapes `execute()`.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::MutationError;

use super::effect::Effect;

/// Lifecycle phase derived from an [`ExecutionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Observable snapshot of one executor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionState {
    pub is_loading: bool,
    pub error: Option<MutationError>,
    pub is_success: bool,
}

impl ExecutionState {
    fn running() -> Self {
        Self {
            is_loading: true,
            error: None,
            is_success: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Running
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.is_success {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }
}

/// Runs a bound effect and records its outcome.
///
/// Overlapping `execute()` calls on the same instance are not serialized:
/// the state ends up reflecting whichever call finished last. Hold one
/// executor per call site.
pub struct MutationExecutor<A, E> {
    name: String,
    effect: Effect<A, E>,
    state: watch::Sender<ExecutionState>,
}

impl<A, E> MutationExecutor<A, E>
where
    A: Send + 'static,
    E: Into<MutationError> + Send + 'static,
{
    pub fn new(name: impl Into<String>, effect: Effect<A, E>) -> Self {
        let (state, _) = watch::channel(ExecutionState::default());
        Self {
            name: name.into(),
            effect,
            state,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the bound effect. Returns the value on success, `None` otherwise.
    #[instrument(skip(self), fields(mutation = %self.name))]
    pub async fn execute(&self) -> Option<A> {
        self.state.send_replace(ExecutionState::running());
        debug!("Mutation started");

        let effect = &self.effect;
        let outcome = AssertUnwindSafe(async move { effect.run().await })
            .catch_unwind()
            .await;

        let (value, failure) = match outcome {
            Ok(Ok(value)) => (Some(value), None),
            Ok(Err(e)) => {
                let failure: MutationError = e.into();
                warn!(tag = failure.tag(), error = %failure, "Mutation failed");
                (None, Some(failure))
            }
            Err(payload) => {
                let failure = MutationError::from_panic(payload);
                error!(error = %failure, "Mutation panicked");
                (None, Some(failure))
            }
        };

        if value.is_some() {
            info!("Mutation succeeded");
        }

        self.state.send_modify(|state| {
            state.is_loading = false;
            state.is_success = failure.is_none();
            state.error = failure;
        });

        value
    }

    /// Current snapshot
    pub fn state(&self) -> ExecutionState {
        self.state.borrow().clone()
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<ExecutionState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_success(&self) -> bool {
        self.state.borrow().is_success
    }

    pub fn error(&self) -> Option<MutationError> {
        self.state.borrow().error.clone()
    }
}
