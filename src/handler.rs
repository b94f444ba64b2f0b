// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::LogRecord;
use std::fmt::Debug;

/**
An output destination for finished log records.

Handlers receive every record that passes the active level threshold.  A record
is emitted to all attached handlers, so `emit` takes the record by reference.
*/
pub trait Handler: Debug + Send + Sync {
    /**
    Writes the finished record to this handler's destination.
    */
    fn emit(&self, record: &LogRecord);

    /**
    The application may imminently exit.  Ensure all buffered output is written.
    */
    fn flush(&self);
}

/*
Boilerplate notes.

# Handler

Clone on Handler doesn't make sense, handlers are shared via Arc instead.
PartialEq/Eq are possible but it's unclear whether we mean data equality or
provenance, so neither is required.
Default is not necessarily sensible since who knows how a handler is
constructed (does it need a filename to write to, etc.)
Send/Sync are required: records are emitted from whichever thread logs.
*/
