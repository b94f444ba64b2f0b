//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logscope

logscope attaches a mutable, execution-scoped key/value context to every log
record a thread emits, and propagates that context automatically to threads
spawned from it.

# The problem

In a concurrent server, a log line without context is close to worthless: which
request failed?  For which user?  Threading identifiers through every function
signature just to log them is invasive, and a process-global bag of fields
bleeds context between requests handled on different threads.

logscope takes a third path: each thread owns a private context map, created
lazily, stamped onto every record that thread emits.  Spawning through
[`spawn`] (or [`Builder`]) hands the child an independent copy of the parent's
map, so correlation survives thread boundaries without any shared mutable
state, and without a single call-site signature change.

# The API

```rust
logscope::initialize(logscope::Level::Info);

logscope::set_log_context("user", "alice");
logscope::info!("handling request");
// 2026-08-07 09:15:04.312 - src/main.rs:6 - INFO - {requestId=…, user=alice} - handling request

let handle = logscope::spawn(|| {
    // Same user, same requestId as the parent at spawn time.
    logscope::info!("resizing avatar");
});
handle.join().unwrap();
```

Records go to stderr in a fixed format:
`timestamp - file:line - LEVEL - context - message`.

The first record a thread emits with a non-empty context gets a UUID-v4
correlation identifier injected under the reserved `requestId` key; it stays
stable for the rest of the thread's lifetime, so every record of one logical
operation can be grepped by one identifier.

# Context manipulation

* [`set_log_context`] — set one key
* [`update_log_context`] — merge a map of keys, last write wins
* [`get_log_context`] — copy the current map out
* [`clear_log_context`] — reset to empty

All of these operate on the calling thread's private store and never fail; a
thread that has never touched its context simply has an empty map.

# Async

Thread-locals don't follow tasks across executor worker threads.  Wrap a
future in [`ApplyContext`] to pin a context map to it for the duration.
*/

mod handler;
mod level;
mod logger;
mod macros;
mod memory_handler;
mod record;
mod stderr_handler;
pub mod context;
pub mod registry;
mod spawn;

pub use context::{
    ApplyContext, ContextMap, ContextValue, clear_log_context, get_log_context, set_log_context,
    update_log_context,
};
pub use handler::Handler;
pub use level::{Level, ParseLevelError};
pub use logger::ContextLogger;
pub use memory_handler::MemoryHandler;
pub use record::LogRecord;
pub use registry::{add_global_handler, global_handlers, initialize, set_global_handlers};
pub use spawn::{Builder, spawn};
pub use stderr_handler::StderrHandler;

#[doc(hidden)]
pub mod hidden {
    pub use crate::macros::{dispatch, enabled};
}
