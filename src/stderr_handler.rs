// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::handler::Handler;
use crate::record::LogRecord;

/**
The reference handler: writes each record to stderr as one line.
*/
#[derive(Debug, Clone)]
pub struct StderrHandler {}

// Boilerplate for a zero-sized handler: Copy/PartialEq/Eq/Hash/Default are all
// trivially implementable and occasionally useful, so they are provided.

impl Copy for StderrHandler {}

impl PartialEq for StderrHandler {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for StderrHandler {}

impl std::hash::Hash for StderrHandler {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for StderrHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl StderrHandler {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Handler for StderrHandler {
    fn emit(&self, record: &LogRecord) {
        use std::io::Write;
        let mut lock = std::io::stderr().lock();
        for part in &record.parts {
            lock.write_all(part.as_bytes())
                .expect("Can't log to stderr");
        }
        lock.write_all(b"\n").expect("Can't log to stderr");
    }

    fn flush(&self) {
        //nothing to do since stderr is unbuffered
    }
}
