//! Key-value persistence used by the ledger.

use crate::errors::AppResult;
use std::collections::HashMap;

/// A string key-value store. The ledger is written under a single key.
pub trait KvStore {
    fn load(&self, key: &str) -> AppResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut kv = Self::new();
        kv.entries.insert(key.to_string(), value.to_string());
        kv
    }
}

impl KvStore for MemoryKv {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
