//! Lazy, composable fallible computations.
//!
//! An [`Effect`] describes work that yields `Ok(A)` or `Err(E)` once run.
//! Building one performs no work; every call to [`Effect::run`] executes the
//! whole chain again from the first step.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

type Thunk<A, E> = dyn Fn() -> BoxFuture<'static, Result<A, E>> + Send + Sync;

/// A deferred computation producing `A` or failing with `E`
pub struct Effect<A, E> {
    thunk: Arc<Thunk<A, E>>,
}

impl<A, E> Clone for Effect<A, E> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<A, E> fmt::Debug for Effect<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect").finish_non_exhaustive()
    }
}

impl<A, E> Effect<A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    /// Wrap a future factory; the factory is called once per run
    pub fn from_future<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            thunk: Arc::new(move || f().boxed()),
        }
    }

    /// Defer a synchronous fallible computation until run
    pub fn suspend<F>(f: F) -> Self
    where
        F: Fn() -> Result<A, E> + Send + Sync + 'static,
    {
        Self::from_future(move || future::ready(f()))
    }

    /// A computation that immediately yields `value`
    pub fn succeed(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::suspend(move || Ok(value.clone()))
    }

    /// A computation that immediately fails with `error`
    pub fn fail(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::suspend(move || Err(error.clone()))
    }

    /// Run this computation, then feed its value to `f` and run the result.
    ///
    /// If this computation fails, `f` is never called and the error is
    /// returned as is.
    pub fn and_then<B, F>(self, f: F) -> Effect<B, E>
    where
        B: Send + 'static,
        F: Fn(A) -> Effect<B, E> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Effect::from_future(move || {
            let first = self.clone();
            let f = Arc::clone(&f);
            async move {
                let value = first.run().await?;
                f(value).run().await
            }
        })
    }

    pub fn map<B, F>(self, f: F) -> Effect<B, E>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Effect::from_future(move || {
            let pending = self.run();
            let f = Arc::clone(&f);
            async move { pending.await.map(|value| f(value)) }
        })
    }

    pub fn map_err<E2, F>(self, f: F) -> Effect<A, E2>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Effect::from_future(move || {
            let pending = self.run();
            let f = Arc::clone(&f);
            async move { pending.await.map_err(|error| f(error)) }
        })
    }

    /// Start executing the computation
    pub fn run(&self) -> BoxFuture<'static, Result<A, E>> {
        (self.thunk)()
    }
}
