//! Key-value storage abstraction.
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! synchronous reads and writes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::TimerError;

/// A synchronous string key-value store.
pub trait LocalStorage {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, TimerError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), TimerError>;

    /// Delete `key` if present.
    fn remove_item(&self, key: &str) -> Result<(), TimerError>;
}

/// In-process storage.
///
/// Clones share the same map, so a store can be handed to one timer and
/// inspected or reused by another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, TimerError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TimerError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), TimerError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
