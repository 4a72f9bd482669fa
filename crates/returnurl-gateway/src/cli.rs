use clap::{Parser, ValueEnum};
use returnurl_service::config::{DEFAULT_HOME_URL, DEFAULT_REQUEST_KEY};
use returnurl_service::ReturnUrlConfig;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "RETURNURL_GATEWAY_LISTEN_ADDR";
pub const REQUEST_KEY_ENV: &str = "RETURNURL_GATEWAY_REQUEST_KEY";
pub const HOME_URL_ENV: &str = "RETURNURL_GATEWAY_HOME_URL";
pub const CACHE_BACKEND_ENV: &str = "RETURNURL_GATEWAY_CACHE_BACKEND";
pub const REDIS_URL_ENV: &str = "RETURNURL_GATEWAY_REDIS_URL";
pub const CACHE_CAPACITY_ENV: &str = "RETURNURL_GATEWAY_CACHE_CAPACITY";
pub const CACHE_TTL_SECS_ENV: &str = "RETURNURL_GATEWAY_CACHE_TTL_SECS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CacheBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for CacheBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheBackendArg::InMemory => write!(f, "in-memory"),
            CacheBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "returnurl-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Request field carrying the token.
    #[arg(long, env = REQUEST_KEY_ENV, default_value = DEFAULT_REQUEST_KEY)]
    pub request_key: String,

    /// Redirect target when no token or fallback resolves.
    #[arg(long, env = HOME_URL_ENV, default_value = DEFAULT_HOME_URL)]
    pub home_url: String,

    #[arg(
        long,
        env = CACHE_BACKEND_ENV,
        value_enum,
        default_value_t = CacheBackendArg::InMemory
    )]
    pub cache_backend: CacheBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("cache_backend", "redis"))]
    pub redis_url: Option<String>,

    /// Maximum entries of the in-memory cache.
    #[arg(long, env = CACHE_CAPACITY_ENV, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: u64,

    /// Time-to-live of in-memory entries; unset keeps them until evicted.
    #[arg(long, env = CACHE_TTL_SECS_ENV)]
    pub cache_ttl_secs: Option<u64>,
}

impl Cli {
    pub fn return_url_config(&self) -> ReturnUrlConfig {
        ReturnUrlConfig::builder()
            .request_key(self.request_key.clone())
            .home_url(self.home_url.clone())
            .build()
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }
}
