mod memory_cache;
mod noop_cache;

pub use memory_cache::InMemoryCache;
pub use noop_cache::NoopCache;
