// SPDX-License-Identifier: MIT OR Apache-2.0

//! Async context preservation.

use std::future::Future;
use std::pin::Pin;
use std::task::Poll;

use super::map::ContextMap;

/// A [`Future`] wrapper that carries a context map across executor boundaries.
///
/// Thread-local context does not survive an executor moving a task between
/// worker threads.  `ApplyContext` owns its own map and swaps it in as the
/// polling thread's live store around every poll, so the wrapped future sees
/// a stable context no matter which thread polls it, and mutations made inside
/// the future persist to the next poll.
///
/// The polling thread's own context is saved before the swap and restored
/// afterwards, so wrapping a future never leaks context into the executor.
///
/// # Examples
///
/// ```rust
/// use logscope::{ApplyContext, get_log_context};
///
/// async fn handle() {
///     assert_eq!(get_log_context().to_string(), "{user=alice}");
/// }
///
/// # async fn example() {
/// let context = [("user", "alice")].into_iter().collect();
/// ApplyContext::new(context, handle()).await;
/// # }
/// ```
pub struct ApplyContext<F> {
    context: Option<ContextMap>,
    future: F,
}

impl<F> ApplyContext<F> {
    /// Wraps `future` so that `context` is the live store during every poll.
    pub fn new(context: ContextMap, future: F) -> Self {
        Self {
            context: Some(context),
            future,
        }
    }

    /// Wraps `future` with a copy of the calling thread's current context,
    /// the same inheritance a thread spawned via [`spawn`](crate::spawn)
    /// would receive.
    pub fn inherit(future: F) -> Self {
        Self {
            context: super::store::snapshot(),
            future,
        }
    }
}

impl<F> Future for ApplyContext<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        let (slot, future) = unsafe {
            //safety: `future` is structurally pinned; `context` is never pinned.
            let this = self.get_unchecked_mut();
            (&mut this.context, Pin::new_unchecked(&mut this.future))
        };
        let prior = super::store::replace(slot.take());
        let result = future.poll(cx);
        *slot = super::store::replace(prior);
        result
    }
}
