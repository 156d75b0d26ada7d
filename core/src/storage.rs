use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::*;

/// Synchronous string-keyed store the session persists into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> core::result::Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> core::result::Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> core::result::Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> core::result::Result<(), StorageError> {
        (**self).remove(key)
    }
}

pub trait StorageKey {
    const KEY: &'static str;
}

/// In-memory store, used for tests and hosts that only need a session to
/// outlive a single view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> core::result::Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> core::result::Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store for environments without persistence, reads are always empty and
/// writes are dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> core::result::Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> core::result::Result<(), StorageError> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> core::result::Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v2".to_string())));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn noop_store_forgets_everything() {
        let mut store = NoopStore;
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(None));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
    }
}
