use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{SESSION_ID_BYTES, SESSION_NAME};
use crate::session::errors::SessionError;
use crate::session::store::{CacheData, InMemorySessionStore, SessionStore};
use crate::session::types::SessionHandle;
use crate::utils::gen_random_string;

const SESSION_PREFIX: &str = "session";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    name: String,
    attributes: BTreeMap<String, Value>,
    saved_at: DateTime<Utc>,
}

impl TryFrom<&StoredSession> for CacheData {
    type Error = SessionError;

    fn try_from(data: &StoredSession) -> Result<Self, Self::Error> {
        Ok(Self {
            value: serde_json::to_string(data)?,
        })
    }
}

impl TryFrom<CacheData> for StoredSession {
    type Error = SessionError;

    fn try_from(data: CacheData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::Storage(e.to_string()))
    }
}

/// Session kept in memory and persisted into a [`SessionStore`] on `save`
#[derive(Debug)]
pub struct MemorySession<S: SessionStore = InMemorySessionStore> {
    name: String,
    id: String,
    attributes: BTreeMap<String, Value>,
    store: S,
}

impl MemorySession<InMemorySessionStore> {
    /// Creates a session named after `SESSION_ASSERT_SESSION_NAME` (default `MOCKSESSID`)
    /// backed by a fresh in-memory store.
    pub fn new() -> Result<Self, SessionError> {
        Self::with_store(InMemorySessionStore::new())
    }
}

impl<S: SessionStore> MemorySession<S> {
    pub fn with_store(store: S) -> Result<Self, SessionError> {
        Ok(Self {
            name: SESSION_NAME.clone(),
            id: generate_session_id()?,
            attributes: BTreeMap::new(),
            store,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reopens a saved session, the way the next request carrying the
    /// session cookie would.
    pub fn restore(store: S, id: &str) -> Result<Self, SessionError> {
        let cached = store
            .get(SESSION_PREFIX, id)?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        let stored: StoredSession = cached.try_into()?;

        tracing::debug!(
            "Restored session {} with {} attributes",
            stored.name,
            stored.attributes.len()
        );

        Ok(Self {
            name: stored.name,
            id: id.to_string(),
            attributes: stored.attributes,
            store,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn generate_session_id() -> Result<String, SessionError> {
    Ok(gen_random_string(*SESSION_ID_BYTES)?)
}

impl<S: SessionStore> SessionHandle for MemorySession<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    fn save(&mut self) -> Result<(), SessionError> {
        let stored = StoredSession {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            saved_at: Utc::now(),
        };
        let data = CacheData::try_from(&stored)?;
        self.store.put(SESSION_PREFIX, &self.id, data)?;

        tracing::debug!("Saved session {} ({})", self.name, self.id);
        Ok(())
    }

    fn invalidate(&mut self) -> Result<(), SessionError> {
        self.store.remove(SESSION_PREFIX, &self.id)?;
        self.attributes.clear();
        self.id = generate_session_id()?;

        tracing::debug!("Invalidated session {}, new id issued", self.name);
        Ok(())
    }
}
