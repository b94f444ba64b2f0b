// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros and their support functions.
//!
//! The macros capture the call site (`file!()`/`line!()`) and defer message
//! formatting behind the threshold check, so the format arguments are only
//! evaluated when the record will actually be emitted.  The support functions
//! are re-exported through `crate::hidden` for the macro expansions; they are
//! not part of the public API.

use crate::level::Level;
use std::fmt;

#[doc(hidden)]
#[inline]
pub fn enabled(level: Level) -> bool {
    crate::registry::logger().enabled(level)
}

#[doc(hidden)]
#[inline]
pub fn dispatch(level: Level, file: &'static str, line: u32, args: fmt::Arguments<'_>) {
    crate::registry::logger().log(level, file, line, args);
}

/// Logs at [`Debug`](crate::Level::Debug) level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        if $crate::hidden::enabled($crate::Level::Debug) {
            $crate::hidden::dispatch($crate::Level::Debug, file!(), line!(), format_args!($($arg)*));
        }
    }};
}

/// Logs at [`Info`](crate::Level::Info) level.
///
/// ```rust
/// logscope::initialize(logscope::Level::Info);
/// logscope::set_log_context("user", "alice");
/// logscope::info!("Hello {}!", "world");
/// # logscope::clear_log_context();
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::hidden::enabled($crate::Level::Info) {
            $crate::hidden::dispatch($crate::Level::Info, file!(), line!(), format_args!($($arg)*));
        }
    }};
}

/// Logs at [`Warning`](crate::Level::Warning) level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        if $crate::hidden::enabled($crate::Level::Warning) {
            $crate::hidden::dispatch($crate::Level::Warning, file!(), line!(), format_args!($($arg)*));
        }
    }};
}

/// Logs at [`Error`](crate::Level::Error) level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        if $crate::hidden::enabled($crate::Level::Error) {
            $crate::hidden::dispatch($crate::Level::Error, file!(), line!(), format_args!($($arg)*));
        }
    }};
}

/// Logs at [`Critical`](crate::Level::Critical) level.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {{
        if $crate::hidden::enabled($crate::Level::Critical) {
            $crate::hidden::dispatch($crate::Level::Critical, file!(), line!(), format_args!($($arg)*));
        }
    }};
}

/// Whether a record at the given level would currently be emitted.
///
/// ```rust
/// logscope::initialize(logscope::Level::Warning);
/// assert!(!logscope::log_enabled!(logscope::Level::Info));
/// assert!(logscope::log_enabled!(logscope::Level::Error));
/// ```
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {
        $crate::hidden::enabled($level)
    };
}
