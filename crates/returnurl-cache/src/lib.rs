//! [`TokenCache`] implementations.
//!
//! [`MokaTokenCache`] keeps entries in process memory and suits a single
//! node or tests. [`RedisTokenCache`] shares entries across nodes so a
//! token issued by one instance resolves on another.

pub mod moka;
pub mod redis;

pub use self::moka::{CacheConfig, MokaTokenCache};
pub use self::redis::RedisTokenCache;
pub use returnurl_core::{CacheError, Result, TokenCache};
