use dashmap::DashMap;

use crate::errors::MarketrankResult;
use crate::traits::IKeyValueStorage;

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: DashMap<String, String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl IKeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> MarketrankResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> MarketrankResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> MarketrankResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
