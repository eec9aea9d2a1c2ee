use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::application::ports::{CacheError, CacheStore};

/// Read-through helper around a [`CacheStore`]. Cache failures never reach
/// the caller: reads degrade to a miss and writes are dropped, with a warning.
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                tracing::debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key, error = %CacheError::from(e), "cached entry unreadable");
                None
            }
        }
    }

    pub async fn write<T: Serialize>(&self, key: &str, value: &T) {
        let result = match serde_json::to_vec(value) {
            Ok(bytes) => self.store.set(key, bytes, self.ttl).await,
            Err(e) => Err(CacheError::from(e)),
        };

        if let Err(e) = result {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }

    /// Called after every write operation
    pub async fn invalidate(&self) {
        if let Err(e) = self.store.flush_all().await {
            tracing::warn!(error = %e, "cache flush failed");
        }
    }
}
