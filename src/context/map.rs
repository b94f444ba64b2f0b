// SPDX-License-Identifier: MIT OR Apache-2.0

//! The key/value bag attached to log output.

use super::value::ContextValue;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Display;

/// An ordered map from string keys to [`ContextValue`]s.
///
/// The map is BTree-backed so its iteration order, and therefore its
/// [`Display`] rendering, is deterministic regardless of insertion order.
///
/// A `ContextMap` returned from [`get_log_context`](super::get_log_context) is
/// a copy; mutating it never affects the live per-thread store.
///
/// # Rendering
///
/// ```rust
/// use logscope::ContextMap;
///
/// let mut map = ContextMap::new();
/// assert_eq!(map.to_string(), "{}");
///
/// map.insert("user", "alice");
/// map.insert("attempt", 2);
/// assert_eq!(map.to_string(), "{attempt=2, user=alice}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMap {
    entries: BTreeMap<String, ContextValue>,
}

impl ContextMap {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a key/value pair, returning the previous value for the key if
    /// there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ContextValue>,
    ) -> Option<ContextValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ContextValue> {
        self.entries.iter()
    }

    /// Merges `other` into this map, overwriting existing keys.
    /// Last write wins per key.
    pub fn merge(&mut self, other: ContextMap) {
        self.entries.extend(other.entries);
    }
}

impl Display for ContextMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in &self.entries {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<ContextValue>> FromIterator<(K, V)> for ContextMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<ContextValue>> Extend<(K, V)> for ContextMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for ContextMap {
    type Item = (String, ContextValue);
    type IntoIter = btree_map::IntoIter<String, ContextValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContextMap {
    type Item = (&'a String, &'a ContextValue);
    type IntoIter = btree_map::Iter<'a, String, ContextValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
