use async_trait::async_trait;
use dashmap::DashMap;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::application::ports::{CacheError, CacheStore};

/// In-process TTL cache. Expired entries are dropped lazily on read and
/// swept on every write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    // key -> (body, expires_at)
    entries: Arc<DashMap<String, (Vec<u8>, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sweep_expired(&self, now: Instant) {
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let now = Instant::now();
        let hit = match self.entries.get(key) {
            Some(entry) if entry.1 > now => return Ok(Some(entry.0.clone())),
            Some(_) => true,
            None => false,
        };

        if hit {
            self.entries.remove_if(key, |_, (_, expires_at)| *expires_at <= now);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let now = Instant::now();
        self.sweep_expired(now);
        self.entries.insert(key.to_string(), (value, now + ttl));
        Ok(())
    }

    async fn flush_all(&self) -> Result<(), CacheError> {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "cache flushed");
        Ok(())
    }
}
