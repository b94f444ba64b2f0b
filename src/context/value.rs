// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values storable in a context map.

use std::fmt::Display;

/// A value attached to a context key.
///
/// Context entries are stringified at record-construction time, so the value
/// set is restricted to types with an obvious, unambiguous text form.
/// `From` conversions cover the common Rust types, so call sites can pass
/// plain literals:
///
/// ```rust
/// use logscope::set_log_context;
///
/// set_log_context("user", "alice");
/// set_log_context("attempt", 3);
/// set_log_context("dry_run", false);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    String(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Display for ContextValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextValue::String(s) => f.write_str(s),
            ContextValue::Bool(b) => write!(f, "{}", b),
            ContextValue::Int(i) => write!(f, "{}", i),
            ContextValue::Uint(u) => write!(f, "{}", u),
            ContextValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::String(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        ContextValue::Bool(value)
    }
}

impl From<i32> for ContextValue {
    fn from(value: i32) -> Self {
        ContextValue::Int(value.into())
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Int(value)
    }
}

impl From<u32> for ContextValue {
    fn from(value: u32) -> Self {
        ContextValue::Uint(value.into())
    }
}

impl From<u64> for ContextValue {
    fn from(value: u64) -> Self {
        ContextValue::Uint(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<uuid::Uuid> for ContextValue {
    fn from(value: uuid::Uuid) -> Self {
        ContextValue::String(value.to_string())
    }
}
