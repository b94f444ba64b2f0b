// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the context module.

use super::map::ContextMap;
use super::store;
use super::value::ContextValue;
use super::{
    ApplyContext, CORRELATION_KEY, clear_log_context, get_log_context, set_log_context,
    update_log_context,
};

#[test]
fn test_last_write_wins() {
    clear_log_context();
    set_log_context("user", "alice");
    set_log_context("attempt", 1);
    set_log_context("attempt", 2);

    let mut partial = ContextMap::new();
    partial.insert("user", "bob");
    partial.insert("region", "eu-west-1");
    update_log_context(partial);

    let context = get_log_context();
    assert_eq!(context.get("user"), Some(&ContextValue::String("bob".to_string())));
    assert_eq!(context.get("attempt"), Some(&ContextValue::Int(2)));
    assert_eq!(
        context.get("region"),
        Some(&ContextValue::String("eu-west-1".to_string()))
    );
    assert_eq!(context.len(), 3);

    clear_log_context();
    assert!(get_log_context().is_empty());
}

#[test]
fn test_get_returns_independent_copy() {
    clear_log_context();
    set_log_context("user", "alice");

    let mut copy = get_log_context();
    copy.insert("user", "mallory");
    copy.insert("extra", true);
    copy.remove("user");

    let fresh = get_log_context();
    assert_eq!(
        fresh.get("user"),
        Some(&ContextValue::String("alice".to_string()))
    );
    assert!(!fresh.contains_key("extra"));
}

#[test]
fn test_clear_before_first_use_is_noop() {
    // This test thread has its own store; clearing before any write must not
    // create one or panic.
    clear_log_context();
    assert!(get_log_context().is_empty());
    assert_eq!(store::snapshot(), None);
}

#[test]
fn test_display_is_deterministic() {
    let mut a = ContextMap::new();
    a.insert("zeta", 1);
    a.insert("alpha", 2);

    let mut b = ContextMap::new();
    b.insert("alpha", 2);
    b.insert("zeta", 1);

    assert_eq!(a.to_string(), "{alpha=2, zeta=1}");
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(ContextMap::new().to_string(), "{}");
}

#[test]
fn test_value_conversions() {
    assert_eq!(ContextValue::from("x"), ContextValue::String("x".to_string()));
    assert_eq!(ContextValue::from(true), ContextValue::Bool(true));
    assert_eq!(ContextValue::from(-3i64), ContextValue::Int(-3));
    assert_eq!(ContextValue::from(7u32), ContextValue::Uint(7));
    assert_eq!(ContextValue::from(1.5f64), ContextValue::Float(1.5));
    assert_eq!(ContextValue::from(true).to_string(), "true");
    assert_eq!(ContextValue::from("alice").to_string(), "alice");
}

#[test]
fn test_stamp_skips_empty_store() {
    clear_log_context();
    assert_eq!(store::stamp_correlation(), "{}");
    // Still no correlation key: an empty context never gets one injected.
    assert!(!get_log_context().contains_key(CORRELATION_KEY));
}

#[test]
fn test_stamp_injects_once_and_is_stable() {
    clear_log_context();
    set_log_context("user", "alice");

    let first = store::stamp_correlation();
    assert!(first.contains("user=alice"));
    assert!(first.contains(CORRELATION_KEY));

    let id_after_first = get_log_context().get(CORRELATION_KEY).cloned();
    assert!(id_after_first.is_some());

    // A second stamp must not regenerate the identifier.
    let second = store::stamp_correlation();
    assert_eq!(first, second);
    assert_eq!(get_log_context().get(CORRELATION_KEY).cloned(), id_after_first);
    clear_log_context();
}

#[test]
fn test_apply_context_carries_and_restores() {
    use futures::executor::block_on;
    use std::future::poll_fn;
    use std::task::Poll;

    clear_log_context();
    set_log_context("outer", "yes");

    let mut polls = 0;
    let inner = poll_fn(move |cx| {
        polls += 1;
        if polls == 1 {
            // The wrapped future sees its own context, not the test thread's.
            assert!(!get_log_context().contains_key("outer"));
            set_log_context("stage", 1);
            cx.waker().wake_by_ref();
            Poll::Pending
        } else {
            // Mutations from the previous poll persisted in the carried map.
            assert_eq!(get_log_context().get("stage"), Some(&ContextValue::Int(1)));
            Poll::Ready(())
        }
    });

    let mut context = ContextMap::new();
    context.insert("task", "worker");
    block_on(ApplyContext::new(context, inner));

    // The test thread's own context was restored around every poll.
    let restored = get_log_context();
    assert_eq!(
        restored.get("outer"),
        Some(&ContextValue::String("yes".to_string()))
    );
    assert!(!restored.contains_key("stage"));
    clear_log_context();
}

#[test]
fn test_apply_context_inherit() {
    use futures::executor::block_on;

    clear_log_context();
    set_log_context("user", "carol");

    let future = ApplyContext::inherit(async {
        assert_eq!(
            get_log_context().get("user"),
            Some(&ContextValue::String("carol".to_string()))
        );
        // Mutations inside the wrapper stay in the carried copy.
        set_log_context("user", "dave");
    });

    block_on(future);
    assert_eq!(
        get_log_context().get("user"),
        Some(&ContextValue::String("carol".to_string()))
    );
    clear_log_context();
}
