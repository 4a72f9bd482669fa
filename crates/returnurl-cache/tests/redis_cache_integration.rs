//! Runs against a real Redis container; requires Docker.
//!
//! `cargo test -p returnurl-cache -- --ignored`

use returnurl_cache::{RedisTokenCache, TokenCache};
use returnurl_test_infra::redis::RedisServer;

async fn start() -> (RedisServer, RedisTokenCache) {
    let server = RedisServer::start()
        .await
        .expect("Failed to start Redis container");
    let conn = server
        .connection()
        .await
        .expect("Failed to get Redis connection");
    (server, RedisTokenCache::new(conn))
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_cache_basic_get_set() {
    let (_server, cache) = start().await;

    assert!(cache.get("ru.4GFfc4").await.unwrap().is_none());

    cache.set("ru.4GFfc4", "/pages/home?tab=2").await.unwrap();

    assert_eq!(
        cache.get("ru.4GFfc4").await.unwrap().as_deref(),
        Some("/pages/home?tab=2")
    );
    assert!(cache.exists("ru.4GFfc4").await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_cache_set_if_absent() {
    let (_server, cache) = start().await;

    assert!(cache.set_if_absent("ru.abc123", "/first").await.unwrap());
    assert!(!cache.set_if_absent("ru.abc123", "/second").await.unwrap());

    assert_eq!(
        cache.get("ru.abc123").await.unwrap().as_deref(),
        Some("/first")
    );
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_cache_custom_prefix() {
    let (server, _cache) = start().await;
    let conn1 = server.connection().await.unwrap();
    let conn2 = server.connection().await.unwrap();

    let cache1 = RedisTokenCache::with_prefix(conn1, "tenant1:");
    let cache2 = RedisTokenCache::with_prefix(conn2, "tenant2:");

    cache1.set("ru.abc123", "/tenant1").await.unwrap();

    assert!(cache1.get("ru.abc123").await.unwrap().is_some());
    assert!(
        cache2.get("ru.abc123").await.unwrap().is_none(),
        "Different prefix should isolate caches"
    );
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_cache_connect_by_url() {
    let server = RedisServer::start().await.unwrap();
    let url = server.url().await.unwrap();

    let cache = RedisTokenCache::connect(&url).await.unwrap();
    cache.set("returnurl.label-abc123", "Checkout").await.unwrap();

    assert_eq!(
        cache.get("returnurl.label-abc123").await.unwrap().as_deref(),
        Some("Checkout")
    );
}
