use moka::sync::Cache;
use returnurl_core::Token;

/// Default maximum number of remembered URLs.
pub const DEFAULT_MEMO_CAPACITY: u64 = 10_000;

/// Remembers the token computed for each URL.
///
/// Only saves rehashing: the cache remains the source of truth, and the
/// table can be cleared or lose entries to eviction at any time without
/// changing any result. Request URLs are client-controlled, so the table
/// is bounded.
#[derive(Debug, Clone)]
pub struct TokenMemo {
    tokens: Cache<String, Token>,
}

impl TokenMemo {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMO_CAPACITY)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            tokens: Cache::new(capacity),
        }
    }

    pub fn get(&self, url: &str) -> Option<Token> {
        self.tokens.get(url)
    }

    pub fn insert(&self, url: &str, token: Token) {
        self.tokens.insert(url.to_string(), token);
    }

    pub fn clear(&self) {
        self.tokens.invalidate_all();
    }

    /// Number of remembered URLs, after pending evictions are applied.
    pub fn len(&self) -> u64 {
        self.tokens.run_pending_tasks();
        self.tokens.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TokenMemo {
    fn default() -> Self {
        Self::new()
    }
}
