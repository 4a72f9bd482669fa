use async_trait::async_trait;
use redis::AsyncCommands;
use returnurl_core::{CacheError, Result, TokenCache};
use tracing::{debug, trace, warn};

const DEFAULT_KEY_PREFIX: &str = "returnurl:";

/// A Redis-based implementation of [`TokenCache`].
///
/// Values are stored as plain strings under `<key_prefix><key>`. Redis
/// applies no expiry to these keys; configure an eviction policy on the
/// server if entries should age out.
#[derive(Debug, Clone)]
pub struct RedisTokenCache {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> CacheError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        CacheError::Timeout(message)
    } else {
        CacheError::Operation(message)
    }
}

impl RedisTokenCache {
    /// Creates a new Redis token cache.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a new Redis token cache with a custom key prefix.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    /// * `key_prefix` - Prefix for cache keys (e.g., "myapp:returnurl:")
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a connection to `redis_url` and wraps it.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).map_err(|e| {
            CacheError::Initialization(format!("invalid redis url '{redis_url}': {e}"))
        })?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Unavailable(format!("failed to connect to redis: {e}")))?;
        Ok(Self::new(conn))
    }

    fn cache_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let redis_key = self.cache_key(key);
        trace!(key = %key, "Fetching value from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&redis_key).await {
            Ok(Some(value)) => {
                debug!(key = %key, "Cache hit in Redis");
                Ok(Some(value))
            }
            Ok(None) => {
                trace!(key = %key, "Cache miss in Redis");
                Ok(None)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let redis_key = self.cache_key(key);
        trace!(key = %key, "Storing value in Redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&redis_key, value).await {
            Ok(()) => {
                debug!(key = %key, "Stored value in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to store value in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let redis_key = self.cache_key(key);

        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(&redis_key).await.map_err(|e| {
            warn!(key = %key, error = %e, "Redis error on exists");
            map_redis_error("failed to check key in Redis", e)
        })
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        let redis_key = self.cache_key(key);
        trace!(key = %key, "Conditionally storing value in Redis");

        let mut conn = self.conn.clone();
        match conn.set_nx::<_, _, bool>(&redis_key, value).await {
            Ok(written) => {
                debug!(key = %key, written, "Conditional store in Redis");
                Ok(written)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to conditionally store value in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }
}
