//! Key-value store contract.
//!
//! Durable storage lives outside the engine. Anything that can read and write
//! string values by string key synchronously can back a [`Workspace`].
//!
//! [`Workspace`]: super::Workspace

use std::collections::HashMap;

use crate::error::EngineResult;

/// A synchronous string-keyed store of string values.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> EngineResult<()>;
}

/// An in-process store backed by a `HashMap`.
///
/// # Example
///
/// ```
/// use workaholic_engine::store::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("workaholic_weekly_limit", "20".to_string()).unwrap();
/// assert_eq!(store.get("workaholic_weekly_limit").as_deref(), Some("20"));
/// assert_eq!(store.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates a store pre-filled with `(key, value)` pairs.
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: slots
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of slots holding a value.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> EngineResult<()> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::default();
        store.set("k", "1".to_string()).unwrap();
        store.set("k", "2".to_string()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_slots() {
        let store = MemoryStore::with_slots([("a", "1"), ("b", "2")]);
        assert_eq!(store.get("b").as_deref(), Some("2"));
        assert!(!store.is_empty());
    }
}
