// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! This module defines [`LogRecord`], the data structure that accumulates the
//! parts of a log line during record construction. Records are built
//! incrementally with [`log`](LogRecord::log) and [`log_owned`](LogRecord::log_owned),
//! then handed to handlers which join the parts for output.
//!
//! Storing parts separately avoids concatenating intermediate strings while the
//! record is assembled, and lets records be passed by value to handlers without
//! any shared buffer.

use crate::Level;
use std::fmt::Display;

/**
A log record.

The record API assumes you progressively write parts into the record rather
than building one big string up front:

1.  Create a new [LogRecord].
2.  Progressively write to the [LogRecord].
3.  Submit the finished record to the attached [Handler](crate::Handler)s.

Once submitted, a record is treated as immutable.

```rust
use logscope::{Level, LogRecord};

let mut record = LogRecord::new(Level::Info);
record.log("Processing request ");
record.log_owned(format!("#{}", 42));
assert_eq!(record.to_string(), "Processing request #42");
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.

    This is useful for parts that are constructed in the process of logging,
    such as formatted values.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /**
    Append the current wall-clock time to the record.
    */
    pub fn log_timestamp(&mut self) {
        let now = chrono::Local::now();
        self.log_owned(now.format("%Y-%m-%d %H:%M:%S%.3f").to_string());
    }

    /**
    Append the source location (`file:line`) to the record.
    */
    pub fn log_source_location(&mut self, file: &str, line: u32) {
        self.log_owned(format!("{}:{}", file, line));
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

- Debug/Clone/PartialEq/Eq/Hash: derived; records are plain data and handlers
  may clone or deduplicate them.
- Default: empty Info record.
- Copy: no, Vec<String> is heap data.
- Ord: no meaningful ordering between records.
- Send: automatic.  Records are owned by one thread while being built.
*/
