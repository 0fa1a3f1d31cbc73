//! Submission service: count lookup, pipeline and store write as one effect.
//!
//! Mirrors what an admin form action does: read the featured count, run the
//! validate-then-policy pipeline, and hand the validated input to the store.
//! The write is the terminal step, so store errors are normalized by the
//! executor like every other failure.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::adapters::ContentStore;
use crate::domain::{ContentEditInput, ContentId, EntityKind, MutationError};

use super::effect::Effect;
use super::executor::{ExecutionState, MutationExecutor};
use super::pipeline::{content_pipeline, counted_featured};
use super::policy::PolicySettings;

/// Whether a submission creates a new item or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Create,
    Update(ContentId),
}

impl Target {
    fn existing(&self) -> Option<ContentId> {
        match self {
            Self::Create => None,
            Self::Update(id) => Some(id.clone()),
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update(_) => "update",
        }
    }
}

/// Result of [`ContentService::submit`]
#[derive(Debug, Clone)]
pub struct Submission {
    /// Id of the written item, if the whole chain succeeded
    pub id: Option<ContentId>,

    /// Final executor state
    pub state: ExecutionState,
}

pub struct ContentService<S> {
    store: Arc<S>,
    policy: PolicySettings,
}

impl<S> ContentService<S>
where
    S: ContentStore + 'static,
{
    pub fn new(store: Arc<S>, policy: PolicySettings) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &PolicySettings {
        &self.policy
    }

    /// Build an executor for one submission without running it
    pub fn executor(
        &self,
        kind: EntityKind,
        target: Target,
        input: ContentEditInput,
    ) -> MutationExecutor<ContentId, MutationError> {
        let name = format!("{}_{}", target.verb(), kind);
        let limit = self.policy.limit_for(kind);
        let store = Arc::clone(&self.store);

        let effect = featured_count(Arc::clone(&store), kind, &target, input.featured)
            .and_then(move |stored| {
                let current = counted_featured(&input, stored);
                content_pipeline(kind, input.clone(), current, limit).map_err(MutationError::from)
            })
            .and_then(move |validated| persist(Arc::clone(&store), kind, target.clone(), validated));

        MutationExecutor::new(name, effect)
    }

    /// Run one submission to completion
    #[instrument(skip(self, kind, input), fields(kind = %kind))]
    pub async fn submit(&self, kind: EntityKind, target: Target, input: ContentEditInput) -> Submission {
        let executor = self.executor(kind, target, input);
        let id = executor.execute().await;

        if let Some(ref id) = id {
            info!(%id, "Content saved");
        }

        Submission {
            id,
            state: executor.state(),
        }
    }
}

/// Stored featured count for `kind`.
///
/// The store is only queried for a featured submission; the count is
/// irrelevant otherwise. An edit excludes the item being edited.
fn featured_count<S>(
    store: Arc<S>,
    kind: EntityKind,
    target: &Target,
    featured: bool,
) -> Effect<u32, MutationError>
where
    S: ContentStore + 'static,
{
    let exclude = target.existing();
    Effect::from_future(move || {
        let store = Arc::clone(&store);
        let exclude = exclude.clone();
        async move {
            if featured {
                store
                    .featured_count(kind, exclude.as_ref())
                    .await
                    .map_err(MutationError::from)
            } else {
                Ok(0)
            }
        }
    })
}

fn persist<S>(
    store: Arc<S>,
    kind: EntityKind,
    target: Target,
    input: ContentEditInput,
) -> Effect<ContentId, MutationError>
where
    S: ContentStore + 'static,
{
    Effect::from_future(move || {
        let store = Arc::clone(&store);
        let target = target.clone();
        let input = input.clone();
        async move {
            let id = match target {
                Target::Create => store.create(kind, input).await?,
                Target::Update(id) => {
                    store.update(kind, &id, input).await?;
                    id
                }
            };
            Ok::<_, MutationError>(id)
        }
    })
}
