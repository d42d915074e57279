// Preference store contract
// Flat key-value namespace holding the registration flag and account fields

use super::persistence::PersistenceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keys used in the preference store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Whether an account has been registered (bool)
    IsRegistered,
    /// Registered display name (string)
    UserName,
    /// Registered email (string)
    UserEmail,
    /// Registered password, plaintext (string)
    UserPassword,
}

impl StoreKey {
    /// Name of the key as written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::IsRegistered => "isRegistered",
            StoreKey::UserName => "userName",
            StoreKey::UserEmail => "userEmail",
            StoreKey::UserPassword => "userPassword",
        }
    }
}

/// A stored value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    /// Boolean flag
    Bool(bool),
    /// Text value
    Text(String),
}

/// Synchronous key-value preference store
///
/// Every `set` is durable on return. There is no flush step and no grouping of
/// writes: a sequence of `set` calls can be interrupted between any two.
pub trait PreferenceStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: StoreKey) -> Option<StoreValue>;

    /// Write a value
    ///
    /// On error the previous value stays in place.
    fn set(&mut self, key: StoreKey, value: StoreValue) -> Result<(), PersistenceError>;

    /// Read a boolean, treating absent or non-boolean values as `false`
    fn get_bool(&self, key: StoreKey) -> bool {
        matches!(self.get(key), Some(StoreValue::Bool(true)))
    }

    /// Read a string, `None` if absent or not a string
    fn get_string(&self, key: StoreKey) -> Option<String> {
        match self.get(key) {
            Some(StoreValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Write a boolean
    fn set_bool(&mut self, key: StoreKey, value: bool) -> Result<(), PersistenceError> {
        self.set(key, StoreValue::Bool(value))
    }

    /// Write a string
    fn set_string(&mut self, key: StoreKey, value: &str) -> Result<(), PersistenceError> {
        self.set(key, StoreValue::Text(value.to_string()))
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<StoreKey, StoreValue>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<StoreValue> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: StoreKey, value: StoreValue) -> Result<(), PersistenceError> {
        self.values.insert(key, value);
        Ok(())
    }
}
