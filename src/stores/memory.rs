use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// Key-value storage held entirely in memory. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_storage_is_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("accounts").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut storage = MemoryStorage::new();
        storage.set_item("accounts", "[]").unwrap();
        storage.set_item("accounts", "[1]").unwrap();
        assert_eq!(storage.get_item("accounts").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut storage = MemoryStorage::new();
        storage.set_item("a", "1").unwrap();
        assert_eq!(storage.get_item("b").unwrap(), None);
    }

    #[test]
    fn test_borrowed_handle_writes_through() {
        fn write_into<S: KeyValueStore>(mut storage: S) {
            storage.set_item("k", "v").unwrap();
        }

        let mut storage = MemoryStorage::new();
        write_into(&mut storage);
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
