use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;

const CACHE_PREFIX: &str = "cache";

/// Data stored in the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheData {
    pub value: String,
}

/// Backing storage for saved sessions
pub trait SessionStore {
    /// Put a record into the store, replacing any previous one.
    fn put(&mut self, prefix: &str, key: &str, value: CacheData) -> Result<(), SessionError>;

    /// Get a record from the store.
    fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, SessionError>;

    /// Remove a record from the store. Removing a missing record is not an error.
    fn remove(&mut self, prefix: &str, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entry: HashMap<String, CacheData>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        tracing::debug!("Creating new in-memory session store");
        Self {
            entry: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    fn make_key(prefix: &str, key: &str) -> String {
        format!("{CACHE_PREFIX}:{prefix}:{key}")
    }
}

impl SessionStore for InMemorySessionStore {
    fn put(&mut self, prefix: &str, key: &str, value: CacheData) -> Result<(), SessionError> {
        let key = Self::make_key(prefix, key);
        self.entry.insert(key, value);
        Ok(())
    }

    fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, SessionError> {
        let key = Self::make_key(prefix, key);
        Ok(self.entry.get(&key).cloned())
    }

    fn remove(&mut self, prefix: &str, key: &str) -> Result<(), SessionError> {
        let key = Self::make_key(prefix, key);
        self.entry.remove(&key);
        Ok(())
    }
}
