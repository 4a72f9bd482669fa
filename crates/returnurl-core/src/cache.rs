use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The external cache token entries and labels are stored in.
///
/// Keys and values are plain strings. Expiry and capacity are the
/// implementation's own policy; a missing key is not an error.
#[async_trait]
pub trait TokenCache: Send + Sync + 'static {
    /// Get the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is not in the cache.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Checks whether `key` is present.
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Store `value` under `key` only if the key is absent.
    ///
    /// Returns `true` if the value was written. The default implementation
    /// is a check followed by a write; backends with an atomic primitive
    /// should override it.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        if self.exists(key).await? {
            return Ok(false);
        }
        self.set(key, value).await?;
        Ok(true)
    }
}

#[async_trait]
impl<T: TokenCache> TokenCache for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key).await
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        (**self).set_if_absent(key, value).await
    }
}
