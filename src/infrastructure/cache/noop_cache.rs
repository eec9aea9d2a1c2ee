use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{CacheError, CacheStore};

/// Used when caching is disabled: never stores, always misses
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl CacheStore for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn flush_all(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
