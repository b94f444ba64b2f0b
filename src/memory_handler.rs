// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory record capture.
//!
//! [`MemoryHandler`] stores emitted records as strings instead of writing them
//! anywhere, which makes it the handler of choice for tests: attach one via
//! [`set_global_handlers`](crate::set_global_handlers), run the code under
//! test, then [`drain`](MemoryHandler::drain) and assert on the output.

use crate::handler::Handler;
use crate::record::LogRecord;
use parking_lot::Mutex;

/// A handler that stores emitted records in memory.
///
/// Thread-safe; share it across threads with `Arc`.
///
/// # Example
///
/// ```rust
/// use logscope::{MemoryHandler, set_global_handlers};
/// use std::sync::Arc;
///
/// let handler = Arc::new(MemoryHandler::new());
/// set_global_handlers(vec![handler.clone()]);
///
/// logscope::warn!("suspicious: {}", 7);
///
/// let output = handler.drain();
/// assert!(output.contains("suspicious: 7"));
///
/// // The buffer is now empty.
/// assert_eq!(handler.drain(), "");
/// ```
#[derive(Debug, Default)]
pub struct MemoryHandler {
    lines: Mutex<Vec<String>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Drains all captured lines into a single newline-joined string,
    /// clearing the internal buffer.
    pub fn drain(&self) -> String {
        let mut lines = self.lines.lock();
        let result = lines.join("\n");
        lines.clear();
        result
    }

    /// Returns the captured lines without clearing them.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Handler for MemoryHandler {
    fn emit(&self, record: &LogRecord) {
        let line = record.to_string();
        self.lines.lock().push(line);
    }

    fn flush(&self) {
        //nothing buffered beyond the capture vector itself
    }
}
