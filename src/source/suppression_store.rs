use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{CoreError, CoreResult};

/// Client-scoped key-value persistence for notice suppression. Survives
/// page loads on one client; never shared across clients.
///
/// Implementations may fail at any call (private browsing, storage quota).
/// Callers must treat `Err` as "no entry" and carry on.
pub trait SuppressionStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory suppression store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| CoreError::StoreUnavailable {
            message: "store lock poisoned".into(),
        })
    }
}

impl SuppressionStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
