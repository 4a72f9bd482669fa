mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod request;
mod state;

use crate::app::App;
use crate::cli::{CacheBackendArg, Cli};
use crate::state::AppState;
use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;
use returnurl_cache::{CacheConfig, MokaTokenCache, RedisTokenCache};
use returnurl_core::TokenCache;
use returnurl_service::{ReturnUrlConfig, ReturnUrlService, TokenMemo};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::try_parse()?;
    let config = cli.return_url_config();
    anyhow::ensure!(
        HeaderValue::from_str(&config.home_url).is_ok(),
        "home url {:?} is not a valid redirect location",
        config.home_url
    );

    info!(
        listen_addr = %cli.listen_addr,
        cache_backend = %cli.cache_backend,
        request_key = %config.request_key,
        home_url = %config.home_url,
        "starting return url gateway"
    );

    match cli.cache_backend {
        CacheBackendArg::InMemory => {
            let cache: MokaTokenCache = match cli.cache_ttl() {
                Some(ttl) => CacheConfig::builder()
                    .max_capacity(cli.cache_capacity)
                    .ttl(ttl)
                    .build()
                    .into(),
                None => MokaTokenCache::with_capacity(cli.cache_capacity),
            };
            run_server(&cli, cache, config).await?;
        }
        CacheBackendArg::Redis => {
            let redis_url = cli
                .redis_url
                .as_deref()
                .context("redis url is required when cache backend is redis")?;
            let cache = RedisTokenCache::connect(redis_url).await?;
            run_server(&cli, cache, config).await?;
        }
    }

    Ok(())
}

async fn run_server<C: TokenCache>(
    cli: &Cli,
    cache: C,
    config: ReturnUrlConfig,
) -> anyhow::Result<()> {
    let listen_addr: SocketAddr = cli.listen_addr;
    let memo = Arc::new(TokenMemo::with_capacity(cli.cache_capacity));
    let service = ReturnUrlService::new(cache, config).with_memo(memo);
    let state = AppState::new(service);
    let router = App::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router).await?;
    Ok(())
}
