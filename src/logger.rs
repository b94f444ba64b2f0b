// SPDX-License-Identifier: MIT OR Apache-2.0

//! The context-aware logger.
//!
//! [`ContextLogger`] bridges the per-thread context store into every record it
//! emits.  Record construction reads the calling thread's context, injects a
//! correlation identifier when one is due, and stamps the record with the
//! rendered context snapshot; everything else about emission (threshold
//! filtering, fan-out to handlers) is ordinary logging plumbing.
//!
//! Most code never constructs a `ContextLogger` directly; the process-wide
//! instance managed by [`registry`](crate::registry) is reached through the
//! logging macros.

use crate::handler::Handler;
use crate::level::Level;
use crate::record::LogRecord;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// A logger that stamps every record with the calling thread's context.
///
/// The active level is an atomic so threshold checks on the hot path are a
/// single relaxed load; the handler list is behind an `RwLock` that is only
/// write-locked during configuration.
#[derive(Debug)]
pub struct ContextLogger {
    name: &'static str,
    level: AtomicU8,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
}

impl ContextLogger {
    pub(crate) fn new(name: &'static str, level: Level) -> Self {
        Self {
            name,
            level: AtomicU8::new(level.to_u8()),
            handlers: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Whether a record at `level` would currently be emitted.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    pub fn set_handlers(&self, handlers: Vec<Arc<dyn Handler>>) {
        *self.handlers.write() = handlers;
    }

    /// Returns the currently attached handlers.
    ///
    /// Cloning the `Arc`s keeps handlers alive for in-flight emissions even
    /// if the configuration changes concurrently.
    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers.read().clone()
    }

    /// The record-construction hook.
    ///
    /// Builds a record in the fixed line format
    /// `timestamp - file:line - LEVEL - context - message`.  Reading the
    /// context may lazily inject a correlation identifier into the calling
    /// thread's live store; see
    /// [`CORRELATION_KEY`](crate::context::CORRELATION_KEY).
    pub fn make_record(
        &self,
        level: Level,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> LogRecord {
        let mut record = LogRecord::new(level);
        record.log_timestamp();
        record.log(" - ");
        record.log_source_location(file, line);
        record.log(" - ");
        record.log(level.as_str());
        record.log(" - ");
        record.log_owned(crate::context::stamp_correlation());
        record.log(" - ");
        match args.as_str() {
            Some(literal) => record.log(literal),
            None => record.log_owned(args.to_string()),
        }
        record
    }

    /// Constructs and emits one record, unless `level` is below the active
    /// threshold.  Never fails; handler I/O trouble is the handler's concern.
    pub fn log(&self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let record = self.make_record(level, file, line, args);
        let handlers = self.handlers();
        for handler in &handlers {
            handler.emit(&record);
        }
    }

    /// Flushes every attached handler.
    pub fn flush(&self) {
        let handlers = self.handlers();
        for handler in &handlers {
            handler.flush();
        }
    }
}
