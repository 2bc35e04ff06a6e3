//! In-process key/value storage for tests and headless runs.
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::ArchiveStorage;

/// Shared map; clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, as if a previous run had written it.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Current raw value under `key`.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ArchiveStorage for MemoryStorage {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.snapshot(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        other.write("dark-mode", "true").unwrap();
        assert_eq!(storage.read("dark-mode").unwrap().as_deref(), Some("true"));
        assert_eq!(other.len(), 1);
    }
}
