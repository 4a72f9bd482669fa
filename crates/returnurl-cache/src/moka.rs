use async_trait::async_trait;
use moka::future::Cache;
use returnurl_core::{Result, TokenCache};
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

const DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// An in-memory cache implementation using Moka.
///
/// Entries are evicted by capacity and, when configured, by time-to-live
/// or time-to-idle. A token whose entry was evicted simply stops resolving.
#[derive(Debug, Clone)]
pub struct MokaTokenCache {
    cache: Cache<String, String>,
}

impl MokaTokenCache {
    /// Creates a new Moka cache holding at most 10,000 entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    /// Creates a new Moka cache with a custom maximum capacity.
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).build();
        Self { cache }
    }

    /// Creates a new Moka cache whose entries expire `ttl` after insertion.
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Creates a new Moka cache whose entries expire after `tti` without access.
    pub fn with_tti(max_capacity: u64, tti: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(tti)
            .build();
        Self { cache }
    }

    /// Returns a builder for creating a custom cache configuration.
    pub fn builder() -> CacheConfigBuilder {
        CacheConfig::builder()
    }
}

impl Default for MokaTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCache for MokaTokenCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.cache.get(key).await;
        match value {
            Some(_) => debug!(key = %key, "Cache hit in Moka"),
            None => trace!(key = %key, "Cache miss in Moka"),
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        debug!(key = %key, "Stored value in Moka");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        let entry = self
            .cache
            .entry(key.to_string())
            .or_insert(value.to_string())
            .await;
        let written = entry.is_fresh();
        trace!(key = %key, written, "Conditional store in Moka");
        Ok(written)
    }
}

/// Configuration for creating a [`MokaTokenCache`] with custom settings.
#[derive(Debug, TypedBuilder, Default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold.
    #[builder(default, setter(strip_option))]
    max_capacity: Option<u64>,
    /// Time-to-live for cache entries.
    #[builder(default, setter(strip_option))]
    ttl: Option<Duration>,
    /// Time-to-idle for cache entries.
    #[builder(default, setter(strip_option))]
    tti: Option<Duration>,
}

impl From<CacheConfig> for MokaTokenCache {
    fn from(config: CacheConfig) -> Self {
        let mut builder =
            Cache::builder().max_capacity(config.max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY));

        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }

        if let Some(tti) = config.tti {
            builder = builder.time_to_idle(tti);
        }

        MokaTokenCache {
            cache: builder.build(),
        }
    }
}
