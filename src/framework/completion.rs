//! # Completion Handles
//!
//! Every network operation returns a [`Completion`]: a lazy future with
//! `done` / `fail` / `always` continuations attached to it.
//!
//! ```rust,ignore
//! let response = contact
//!     .save(&transport)
//!     .done(|json| info!(?json, "saved"))
//!     .fail(|e| warn!(error = %e, "save failed"))
//!     .always(|| spinner.stop())
//!     .await?;
//! ```
//!
//! Continuations run when the completion is awaited and the underlying call
//! finishes: the matching `done` or `fail` callbacks first, in registration
//! order, then every `always` callback. The result is then handed back to the
//! awaiting caller unchanged.

use crate::framework::{ResourceError, Result};
use futures::future::BoxFuture;
use std::future::{Future, IntoFuture};

type DoneFn<'a, T> = Box<dyn FnOnce(&T) + Send + 'a>;
type FailFn<'a> = Box<dyn FnOnce(&ResourceError) + Send + 'a>;
type AlwaysFn<'a> = Box<dyn FnOnce() + Send + 'a>;

/// Handle for an in-flight (or already settled) resource operation.
#[must_use = "a Completion does nothing unless awaited or spawned"]
pub struct Completion<'a, T> {
    future: BoxFuture<'a, Result<T>>,
    on_done: Vec<DoneFn<'a, T>>,
    on_fail: Vec<FailFn<'a>>,
    on_always: Vec<AlwaysFn<'a>>,
}

impl<'a, T: Send + 'a> Completion<'a, T> {
    pub fn new(future: impl Future<Output = Result<T>> + Send + 'a) -> Self {
        Self {
            future: Box::pin(future),
            on_done: Vec::new(),
            on_fail: Vec::new(),
            on_always: Vec::new(),
        }
    }

    /// A completion that settles immediately with `result`.
    pub fn ready(result: Result<T>) -> Self {
        Self::new(futures::future::ready(result))
    }

    /// A completion that settles immediately with `error`.
    pub fn failed(error: ResourceError) -> Self {
        Self::ready(Err(error))
    }

    /// Runs `f` with the result on success.
    pub fn done(mut self, f: impl FnOnce(&T) + Send + 'a) -> Self {
        self.on_done.push(Box::new(f));
        self
    }

    /// Runs `f` with the error on failure.
    pub fn fail(mut self, f: impl FnOnce(&ResourceError) + Send + 'a) -> Self {
        self.on_fail.push(Box::new(f));
        self
    }

    /// Runs `f` once the operation settles either way.
    pub fn always(mut self, f: impl FnOnce() + Send + 'a) -> Self {
        self.on_always.push(Box::new(f));
        self
    }

    async fn settle(self) -> Result<T> {
        let Self {
            future,
            on_done,
            on_fail,
            on_always,
        } = self;

        let result = future.await;
        match &result {
            Ok(value) => on_done.into_iter().for_each(|f| f(value)),
            Err(e) => on_fail.into_iter().for_each(|f| f(e)),
        }
        on_always.into_iter().for_each(|f| f());
        result
    }
}

impl<T: Send + 'static> Completion<'static, T> {
    /// Drives the completion on the Tokio runtime without blocking the caller.
    ///
    /// Only `'static` completions can be spawned. `save`, `fetch` and
    /// `find_all` borrow the record and the transport, so move both into an
    /// owning future first and hand the record back with the result:
    ///
    /// ```rust,ignore
    /// let transport = Arc::new(transport);
    /// let handle = Completion::new(async move {
    ///     let mut contact = contact;
    ///     contact.save(&*transport).await.map(|_| contact)
    /// })
    /// .spawn();
    /// let saved = handle.await??;
    /// ```
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<T>> {
        tokio::spawn(self.settle())
    }
}

impl<'a, T: Send + 'a> IntoFuture for Completion<'a, T> {
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'a, Result<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.settle())
    }
}
