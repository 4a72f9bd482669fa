use crate::config::ReturnUrlConfig;
use crate::extractor::extract_token;
use crate::memo::TokenMemo;
use returnurl_core::{Checksum, Crc32, FieldValue, RequestFields, Token, TokenCache};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Issues tokens for URLs and resolves them back.
///
/// The service wraps a [`TokenCache`] and a [`Checksum`]:
/// - URL entries live under `<request_key>.<token>` and are write-once;
///   when two URLs collide on a token, the first one stored keeps it
/// - tokens already computed are remembered in a [`TokenMemo`]
/// - cache failures never surface from the read path; they are logged and
///   treated as a miss
///
/// Cloning is cheap and clones share the cache, checksum and memo table.
pub struct ReturnUrlService<C, H = Crc32> {
    pub(crate) cache: Arc<C>,
    checksum: Arc<H>,
    memo: Arc<TokenMemo>,
    pub(crate) config: Arc<ReturnUrlConfig>,
}

impl<C, H> Clone for ReturnUrlService<C, H> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            checksum: Arc::clone(&self.checksum),
            memo: Arc::clone(&self.memo),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: TokenCache> ReturnUrlService<C, Crc32> {
    /// Creates a service deriving tokens with CRC-32.
    pub fn new(cache: C, config: ReturnUrlConfig) -> Self {
        Self::with_checksum(cache, Crc32, config)
    }
}

impl<C: TokenCache, H: Checksum> ReturnUrlService<C, H> {
    /// Creates a service with a custom checksum.
    ///
    /// Tokens issued under one checksum do not resolve under another.
    pub fn with_checksum(cache: C, checksum: H, config: ReturnUrlConfig) -> Self {
        Self {
            cache: Arc::new(cache),
            checksum: Arc::new(checksum),
            memo: Arc::new(TokenMemo::new()),
            config: Arc::new(config),
        }
    }

    /// Replaces the memo table, e.g. to share one between services.
    pub fn with_memo(mut self, memo: Arc<TokenMemo>) -> Self {
        self.memo = memo;
        self
    }

    pub fn config(&self) -> &ReturnUrlConfig {
        &self.config
    }

    pub fn memo(&self) -> &TokenMemo {
        &self.memo
    }

    /// Returns the token for `url`, storing the URL under it if the token
    /// has no entry yet.
    ///
    /// Always yields a token. If the cache cannot be written the failure is
    /// logged and the token will not resolve.
    pub async fn encode(&self, url: &str) -> Token {
        let token = self.token_for(url);
        let key = self.url_key(&token);

        match self.cache.set_if_absent(&key, url).await {
            Ok(true) => debug!(token = %token, url = %url, "Stored return url"),
            Ok(false) => trace!(token = %token, "Token already has a return url"),
            Err(e) => warn!(token = %token, error = %e, "Failed to store return url"),
        }

        token
    }

    /// Looks up the URL stored under `token`.
    ///
    /// Returns `None` for an empty token, a cache miss or a cache error.
    pub async fn decode(&self, token: &Token) -> Option<String> {
        if token.is_empty() {
            return None;
        }

        let key = self.url_key(token);
        match self.cache.get(&key).await {
            Ok(Some(url)) => {
                debug!(token = %token, url = %url, "Resolved token");
                Some(url)
            }
            Ok(None) => {
                trace!(token = %token, "Token not found");
                None
            }
            Err(e) => {
                warn!(token = %token, error = %e, "Failed to resolve token");
                None
            }
        }
    }

    /// Like [`decode`](Self::decode) for a raw field value; a list never
    /// resolves.
    pub async fn decode_field(&self, value: &FieldValue) -> Option<String> {
        let raw = value.as_scalar()?;
        self.decode(&Token::new_unchecked(raw)).await
    }

    /// Issues a token for the URL of the current request.
    ///
    /// Returns `None` when there is no request context.
    pub async fn current_token<R>(&self, request: &R) -> Option<Token>
    where
        R: RequestFields + ?Sized,
    {
        let url = request.url()?;
        Some(self.encode(url).await)
    }

    /// Reads the token the client sent back, if any.
    pub fn request_token<R>(&self, request: &R) -> Option<Token>
    where
        R: RequestFields + ?Sized,
    {
        extract_token(request, &self.config.request_key)
    }

    /// Decides where to redirect: the URL behind the request token, else
    /// `fallback`, else the configured home URL.
    pub async fn resolve_url<R>(&self, request: &R, fallback: Option<&str>) -> String
    where
        R: RequestFields + ?Sized,
    {
        if let Some(token) = self.request_token(request) {
            if let Some(url) = self.decode(&token).await.filter(|url| !url.is_empty()) {
                return url;
            }
        }

        match fallback.filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => self.config.home_url.clone(),
        }
    }

    fn token_for(&self, url: &str) -> Token {
        if let Some(token) = self.memo.get(url) {
            return token;
        }

        let token = Token::from_checksum(self.checksum.checksum(url.as_bytes()));
        self.memo.insert(url, token.clone());
        token
    }

    fn url_key(&self, token: &Token) -> String {
        format!("{}.{}", self.config.request_key, token)
    }
}
