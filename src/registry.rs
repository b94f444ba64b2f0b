// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide logger registry.
//!
//! This module owns the single default [`ContextLogger`] instance.  It is
//! created once, on the first call to [`initialize`] or the first emitted
//! record, and lives for the remainder of the process.
//!
//! # Initialization
//!
//! [`initialize`] attaches exactly one stderr handler and sets the active
//! threshold.  Re-initialization is idempotent: later calls only update the
//! threshold and never attach a second handler, so there is no way to
//! double-emit by initializing twice.
//!
//! Logging before [`initialize`] works too; the logger then comes up with the
//! same stderr handler and the default ([`Level::Info`]) threshold.  Absence
//! of setup is a default configuration, not an error.
//!
//! # Concurrency
//!
//! Creation goes through a `OnceLock`, so racing initializers agree on one
//! instance.  For a deterministic threshold from the very first record,
//! initialize before spawning threads that log.

use crate::handler::Handler;
use crate::level::Level;
use crate::logger::ContextLogger;
use crate::stderr_handler::StderrHandler;
use std::sync::{Arc, OnceLock};

/// Fixed name of the process-wide logger instance.
pub const LOGGER_NAME: &str = "logscope";

static LOGGER: OnceLock<ContextLogger> = OnceLock::new();

fn get_or_init(level: Level) -> &'static ContextLogger {
    LOGGER.get_or_init(|| {
        let logger = ContextLogger::new(LOGGER_NAME, level);
        logger.add_handler(Arc::new(StderrHandler::new()));
        logger
    })
}

/// Sets up the process-wide logger: one stderr handler, threshold `level`.
///
/// Idempotent.  The first call creates the logger; subsequent calls only
/// update the threshold.
///
/// # Examples
///
/// ```rust
/// logscope::initialize(logscope::Level::Warning);
/// logscope::info!("below threshold, not emitted");
/// logscope::warn!("emitted to stderr");
/// ```
pub fn initialize(level: Level) {
    get_or_init(level).set_level(level);
}

/// Returns the process-wide logger, creating it with defaults if
/// [`initialize`] has not run yet.
pub fn logger() -> &'static ContextLogger {
    get_or_init(Level::default())
}

/// Appends a handler to the process-wide logger.
pub fn add_global_handler(handler: Arc<dyn Handler>) {
    logger().add_handler(handler);
}

/// Replaces all handlers on the process-wide logger.
///
/// Useful in tests to swap the stderr handler for a
/// [`MemoryHandler`](crate::MemoryHandler).
pub fn set_global_handlers(handlers: Vec<Arc<dyn Handler>>) {
    logger().set_handlers(handlers);
}

/// Returns the handlers currently attached to the process-wide logger.
pub fn global_handlers() -> Vec<Arc<dyn Handler>> {
    logger().handlers()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_handler::MemoryHandler;
    use parking_lot::Mutex;

    static TEST_REGISTRY_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn test_initialize_is_idempotent() {
        let _guard = TEST_REGISTRY_GUARD.lock();
        initialize(Level::Warning);
        let count = global_handlers().len();

        initialize(Level::Debug);
        initialize(Level::Error);

        // No duplicate handlers, and the last threshold wins.
        assert_eq!(global_handlers().len(), count);
        assert_eq!(logger().level(), Level::Error);
        assert_eq!(logger().name(), LOGGER_NAME);
    }

    #[test]
    fn test_add_handler() {
        let _guard = TEST_REGISTRY_GUARD.lock();
        set_global_handlers(vec![Arc::new(MemoryHandler::new())]);
        let initial_count = global_handlers().len();

        add_global_handler(Arc::new(MemoryHandler::new()));

        assert_eq!(global_handlers().len(), initial_count + 1);
    }

    #[test]
    fn test_set_handlers() {
        let _guard = TEST_REGISTRY_GUARD.lock();
        let handler1 = Arc::new(MemoryHandler::new());
        let handler2 = Arc::new(MemoryHandler::new());

        set_global_handlers(vec![handler1, handler2]);

        assert_eq!(global_handlers().len(), 2);
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let _guard = TEST_REGISTRY_GUARD.lock();
        set_global_handlers(vec![Arc::new(MemoryHandler::new())]);

        let handler = Arc::new(MemoryHandler::new());
        let handler_clone = handler.clone();

        let handle = thread::spawn(move || {
            add_global_handler(handler_clone);
        });

        let _ = global_handlers();

        handle.join().expect("Thread should complete successfully");

        assert!(global_handlers().len() >= 2);
    }
}
