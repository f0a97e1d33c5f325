//! Persistent key-value preference storage.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::Result;

/// Origin-scoped string storage, `localStorage` in the browser.
pub trait PreferenceStorage {
    /// Stored value, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str);
}

/// In-memory storage, used in tests and when the browser denies
/// `localStorage`. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme"), None);

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));

        storage.remove("theme");
        assert_eq!(storage.get("theme"), None);
    }
}
