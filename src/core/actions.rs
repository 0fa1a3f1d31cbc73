//! Load/error tracking around single collaborator calls.
//!
//! Used for comment moderation, which has no validation pipeline. A failure
//! is both stored in [`ActionState`] and returned to the caller. There is no
//! success flag: `Ok` is the success signal.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::watch;
use tracing::{debug, error, instrument, warn};

use crate::adapters::CommentModerator;
use crate::domain::{CommentId, MutationError};

/// Observable snapshot of an [`ActionRunner`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionState {
    pub is_loading: bool,
    pub error: Option<MutationError>,
}

/// Tracks loading and the last error across a sequence of actions
pub struct ActionRunner {
    state: watch::Sender<ActionState>,
}

impl Default for ActionRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRunner {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ActionState::default());
        Self { state }
    }

    /// Await `action`, recording loading and any normalized error
    #[instrument(skip(self, action))]
    pub async fn run<T, Fut>(&self, name: &str, action: Fut) -> Result<T, MutationError>
    where
        Fut: Future<Output = anyhow::Result<T>>,
    {
        self.state.send_replace(ActionState {
            is_loading: true,
            error: None,
        });
        debug!("Action started");

        let outcome = AssertUnwindSafe(action).catch_unwind().await;

        let result = match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                let failure = MutationError::from(e);
                warn!(error = %failure, "Action failed");
                Err(failure)
            }
            Err(payload) => {
                let failure = MutationError::from_panic(payload);
                error!(error = %failure, "Action panicked");
                Err(failure)
            }
        };

        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error = result.as_ref().err().cloned();
        });

        result
    }

    pub fn state(&self) -> ActionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ActionState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<MutationError> {
        self.state.borrow().error.clone()
    }
}

/// Approve/reject actions for visitor comments
pub struct CommentModeration<M> {
    moderator: Arc<M>,
    runner: ActionRunner,
}

impl<M: CommentModerator> CommentModeration<M> {
    pub fn new(moderator: Arc<M>) -> Self {
        Self {
            moderator,
            runner: ActionRunner::new(),
        }
    }

    pub async fn approve_comment(&self, id: &CommentId) -> Result<(), MutationError> {
        self.runner
            .run("approve_comment", self.moderator.approve(id))
            .await
    }

    pub async fn reject_comment(&self, id: &CommentId) -> Result<(), MutationError> {
        self.runner
            .run("reject_comment", self.moderator.reject(id))
            .await
    }

    pub fn state(&self) -> ActionState {
        self.runner.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ActionState> {
        self.runner.subscribe()
    }
}
