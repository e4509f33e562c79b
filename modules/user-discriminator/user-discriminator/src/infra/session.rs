//! In-memory session store.

use std::collections::HashMap;

use parking_lot::RwLock;
use user_discriminator_sdk::SessionStore;

/// Process-local [`SessionStore`] for single-node deployments and tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.write().insert(key.to_owned(), value);
    }
}
