// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-local context management.
//!
//! This module provides the per-thread key/value store that logscope attaches
//! to every emitted record.  Each thread owns exactly one store, created
//! lazily on first write; no other thread can reach it, so no locking is
//! involved on the logging path.
//!
//! # Overview
//!
//! - [`ContextMap`]: the ordered key/value bag, rendered deterministically
//!   into record output
//! - [`ContextValue`]: the scalar/string types a context entry can hold
//! - [`set_log_context`], [`get_log_context`], [`update_log_context`],
//!   [`clear_log_context`]: the mutation surface for the calling thread's
//!   live store
//! - [`ApplyContext`]: a [`Future`](std::future::Future) wrapper that carries
//!   a context map across executor boundaries
//!
//! # Copy-out semantics
//!
//! [`get_log_context`] returns a copy.  The live store is only ever mutated
//! through the functions above (plus the one sanctioned correlation-stamp
//! write on the record path), so concurrent threads cannot observe or corrupt
//! each other's context:
//!
//! ```rust
//! use logscope::{set_log_context, get_log_context};
//!
//! set_log_context("user", "alice");
//!
//! let mut copy = get_log_context();
//! copy.insert("user", "mallory");
//!
//! // The live store is unaffected by mutations of the copy.
//! assert_eq!(get_log_context().to_string(), "{user=alice}");
//! # logscope::clear_log_context();
//! ```
//!
//! # Inheritance
//!
//! A thread spawned through [`spawn`](crate::spawn) or
//! [`Builder`](crate::Builder) starts with an independent copy of its
//! creator's store, taken before the child runs any user code.  Later
//! mutations on either side are invisible to the other.

mod apply_context;
mod map;
mod store;
mod value;

#[cfg(test)]
mod tests;

// Re-export public types
pub use apply_context::ApplyContext;
pub use map::ContextMap;
pub use store::{
    CORRELATION_KEY, clear_log_context, get_log_context, set_log_context, update_log_context,
};
pub use value::ContextValue;

pub(crate) use store::{adopt, snapshot, stamp_correlation};
