//! In-memory parameter store

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::store::{validate_key, ParamStore};

/// Volatile store used for tests and `--memory-store` demo runs
#[derive(Debug, Default)]
pub struct MemoryParamStore {
    values: RwLock<HashMap<String, bool>>,
}

impl MemoryParamStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value (builder style)
    pub fn with_value(self, key: impl Into<String>, value: bool) -> Self {
        self.values.write().insert(key.into(), value);
        self
    }

    /// Number of keys that have been written
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

#[async_trait]
impl ParamStore for MemoryParamStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_bool(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        Ok(self.values.read().get(key).copied().unwrap_or(false))
    }

    async fn put_bool(&self, key: &str, value: bool) -> StoreResult<()> {
        validate_key(key)?;
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}
