// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context-inheriting thread construction.
//!
//! Threads created through [`spawn`] or [`Builder`] start with an independent
//! copy of the creating thread's context map, taken at construction time.
//! Correlation identifiers and caller-set fields therefore survive across the
//! thread boundary, while later mutations on either side stay invisible to
//! the other.
//!
//! The copy is seeded before the child's closure runs, so no user code can
//! observe a child thread without its inherited context.  Construction is
//! otherwise identical to [`std::thread`]: same closure, same
//! [`JoinHandle`] semantics.

use std::io;
use std::thread::{self, JoinHandle};

/// Spawns a new thread that inherits the calling thread's context.
///
/// Drop-in replacement for [`std::thread::spawn`].  If the calling thread has
/// never touched its context, the child starts with the usual lazy default,
/// indistinguishable from an empty map.
///
/// # Examples
///
/// ```rust
/// logscope::set_log_context("user", "alice");
///
/// let handle = logscope::spawn(|| {
///     // The child sees a copy of the parent's context at spawn time.
///     assert_eq!(logscope::get_log_context().to_string(), "{user=alice}");
///     logscope::set_log_context("worker", true);
/// });
/// handle.join().unwrap();
///
/// // The child's mutation did not leak back.
/// assert!(!logscope::get_log_context().contains_key("worker"));
/// # logscope::clear_log_context();
/// ```
pub fn spawn<F, T>(f: F) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let context = crate::context::snapshot();
    thread::spawn(move || {
        crate::context::adopt(context);
        f()
    })
}

/// Thread factory mirroring [`std::thread::Builder`], with context
/// inheritance.
///
/// ```rust
/// let handle = logscope::Builder::new()
///     .name("ingest-worker".to_string())
///     .spawn(|| {
///         assert_eq!(std::thread::current().name(), Some("ingest-worker"));
///     })
///     .expect("failed to spawn thread");
/// handle.join().unwrap();
/// ```
#[derive(Debug)]
pub struct Builder {
    inner: thread::Builder,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            inner: thread::Builder::new(),
        }
    }

    /// Names the thread-to-be; the name is passed through unchanged.
    pub fn name(self, name: String) -> Self {
        Self {
            inner: self.inner.name(name),
        }
    }

    /// Sets the stack size for the thread-to-be.
    pub fn stack_size(self, size: usize) -> Self {
        Self {
            inner: self.inner.stack_size(size),
        }
    }

    /// Spawns the thread with the calling thread's context copied in.
    ///
    /// # Errors
    ///
    /// Exactly the errors of [`std::thread::Builder::spawn`], i.e. the OS
    /// refusing to create the thread.
    pub fn spawn<F, T>(self, f: F) -> io::Result<JoinHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let context = crate::context::snapshot();
        self.inner.spawn(move || {
            crate::context::adopt(context);
            f()
        })
    }
}
