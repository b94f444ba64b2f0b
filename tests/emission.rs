// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end emission tests: threshold filtering, record format, and
//! correlation-identifier injection, observed through a MemoryHandler.
//!
//! These tests share the process-wide logger, so each one holds a guard mutex
//! while it reconfigures handlers or the threshold.  Context itself needs no
//! guard: every test runs on its own thread and therefore owns a private map.

use logscope::{
    ContextValue, Level, MemoryHandler, clear_log_context, get_log_context, initialize,
    set_global_handlers, set_log_context,
};
use parking_lot::Mutex;
use std::sync::Arc;

static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

/// Swaps in a fresh MemoryHandler and sets the threshold.
fn capture(level: Level) -> Arc<MemoryHandler> {
    initialize(level);
    let handler = Arc::new(MemoryHandler::new());
    set_global_handlers(vec![handler.clone()]);
    handler
}

#[test]
fn test_threshold_filters_then_emits_with_context() {
    let _guard = TEST_LOGGER_GUARD.lock();
    let handler = capture(Level::Warning);

    set_log_context("user", "alice");

    logscope::info!("not emitted, below threshold");
    assert_eq!(handler.drain(), "");

    logscope::warn!("emitted");
    let output = handler.drain();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("user=alice"));
    assert!(lines[0].contains("requestId="));
    assert!(lines[0].contains(" - WARNING - "));
    assert!(lines[0].contains("emitted"));

    clear_log_context();
}

#[test]
fn test_record_format_shape() {
    let _guard = TEST_LOGGER_GUARD.lock();
    let handler = capture(Level::Info);
    clear_log_context();

    logscope::error!("boom {}", 42);
    logscope::registry::logger().flush();
    let output = handler.drain();

    // timestamp - file:line - LEVEL - context - message
    let fields: Vec<&str> = output.splitn(5, " - ").collect();
    assert_eq!(fields.len(), 5);
    assert!(fields[1].starts_with("tests/emission.rs:"));
    assert_eq!(fields[2], "ERROR");
    assert_eq!(fields[3], "{}");
    assert_eq!(fields[4], "boom 42");
}

#[test]
fn test_correlation_injected_once_and_stable() {
    let _guard = TEST_LOGGER_GUARD.lock();
    let handler = capture(Level::Info);

    set_log_context("job", 7);
    logscope::info!("first");
    logscope::info!("second");

    let output = handler.drain();
    let ids: Vec<&str> = output
        .lines()
        .map(|line| {
            let start = line.find("requestId=").expect("correlation field missing");
            let rest = &line[start + "requestId=".len()..];
            rest.split([',', '}']).next().unwrap()
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], ids[1]);
    // UUID-v4 textual form.
    assert_eq!(ids[0].len(), 36);
    assert!(uuid::Uuid::parse_str(ids[0]).is_ok());

    // The identifier was written through to the live store.
    let context = get_log_context();
    assert_eq!(
        context.get("requestId"),
        Some(&ContextValue::String(ids[0].to_string()))
    );

    clear_log_context();
}

#[test]
fn test_empty_context_never_gets_correlation() {
    let _guard = TEST_LOGGER_GUARD.lock();
    let handler = capture(Level::Info);
    clear_log_context();

    logscope::info!("no context");
    logscope::info!("still none");

    let lines = handler.lines();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.contains(" - {} - "));
        assert!(!line.contains("requestId"));
    }
    assert!(get_log_context().is_empty());
}

#[test]
fn test_message_formatting_is_lazy() {
    let _guard = TEST_LOGGER_GUARD.lock();
    let _handler = capture(Level::Error);

    let mut evaluated = false;
    let mut expensive = || {
        evaluated = true;
        "value"
    };
    logscope::debug!("{}", expensive());
    assert!(!evaluated);
}
