// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-thread live context store.

use super::map::ContextMap;
use super::value::ContextValue;
use std::cell::RefCell;
use uuid::Uuid;

/// Reserved key under which a correlation identifier is injected the first
/// time a record is produced while the context is non-empty.
pub const CORRELATION_KEY: &str = "requestId";

thread_local! {
    /// `None` until the thread first writes context (or inherits some at
    /// spawn).  Kept `Option` so "never touched" is distinguishable from
    /// "explicitly cleared", which costs nothing for threads that never log
    /// with context.
    static LOG_CONTEXT: RefCell<Option<ContextMap>> = const { RefCell::new(None) };
}

/// Sets a key/value pair in the calling thread's context.
///
/// Creates the store if this thread has none yet.  Always succeeds.
///
/// # Examples
///
/// ```rust
/// logscope::set_log_context("user", "alice");
/// assert_eq!(logscope::get_log_context().to_string(), "{user=alice}");
/// # logscope::clear_log_context();
/// ```
pub fn set_log_context(key: impl Into<String>, value: impl Into<ContextValue>) {
    let key = key.into();
    debug_assert!(!key.is_empty(), "context keys must be non-empty");
    LOG_CONTEXT.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(ContextMap::new)
            .insert(key, value);
    });
}

/// Returns a copy of the calling thread's current context.
///
/// If the thread has no store yet, returns an empty map without creating one.
/// Mutating the returned map never affects the live store.
pub fn get_log_context() -> ContextMap {
    LOG_CONTEXT.with(|cell| cell.borrow().clone().unwrap_or_default())
}

/// Merges `new_context` into the calling thread's context, overwriting
/// existing keys.  Creates the store if absent.
pub fn update_log_context(new_context: ContextMap) {
    LOG_CONTEXT.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(ContextMap::new)
            .merge(new_context);
    });
}

/// Resets the calling thread's context to empty.
///
/// No-op if the store was never initialized.
pub fn clear_log_context() {
    LOG_CONTEXT.with(|cell| {
        if let Some(map) = cell.borrow_mut().as_mut() {
            map.clear();
        }
    });
}

/// Copies the calling thread's store out for handoff to a new thread.
///
/// `None` means the store was never touched; the receiving thread then starts
/// with its own lazy default, indistinguishable from an empty map.
pub(crate) fn snapshot() -> Option<ContextMap> {
    LOG_CONTEXT.with(|cell| cell.borrow().clone())
}

/// Seeds the calling thread's store with an inherited snapshot.
///
/// Called on a freshly spawned thread before any user code runs, so no other
/// code can observe the transition.
pub(crate) fn adopt(context: Option<ContextMap>) {
    LOG_CONTEXT.with(|cell| {
        *cell.borrow_mut() = context;
    });
}

/// Swaps the calling thread's store, returning the previous one.
pub(crate) fn replace(context: Option<ContextMap>) -> Option<ContextMap> {
    LOG_CONTEXT.with(|cell| std::mem::replace(&mut *cell.borrow_mut(), context))
}

/// The record-construction read path: renders the current context, injecting a
/// correlation identifier first if one is due.
///
/// If the live map is non-empty and lacks [`CORRELATION_KEY`], a fresh UUID-v4
/// is written into the *live* store so every later record from this thread
/// carries the same identifier.  This is the only mutation performed from the
/// read path.  An empty or absent store renders as `{}` and is left alone.
pub(crate) fn stamp_correlation() -> String {
    LOG_CONTEXT.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            None => ContextMap::new().to_string(),
            Some(map) => {
                if !map.is_empty() && !map.contains_key(CORRELATION_KEY) {
                    map.insert(CORRELATION_KEY, Uuid::new_v4());
                }
                map.to_string()
            }
        }
    })
}
