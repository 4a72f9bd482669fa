use crate::config::LABEL_KEY_PREFIX;
use crate::service::ReturnUrlService;
use returnurl_core::{CacheError, Checksum, Token, TokenCache};
use tracing::{debug, warn};

fn label_key(token: &Token) -> String {
    format!("{LABEL_KEY_PREFIX}-{token}")
}

/// Human-readable labels attached to tokens, e.g. "Back to checkout".
///
/// Labels are stored next to, but independently of, the URL entries: a
/// label may outlive its URL or be set for a token that never had one.
impl<C: TokenCache, H: Checksum> ReturnUrlService<C, H> {
    /// Stores `label` for `token`, replacing any previous label.
    pub async fn set_label(&self, token: &Token, label: &str) -> Result<(), CacheError> {
        self.cache.set(&label_key(token), label).await?;
        debug!(token = %token, label = %label, "Stored token label");
        Ok(())
    }

    /// Returns the label stored for `token`, if any.
    pub async fn get_label(&self, token: &Token) -> Option<String> {
        match self.cache.get(&label_key(token)).await {
            Ok(label) => label,
            Err(e) => {
                warn!(token = %token, error = %e, "Failed to read token label");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ReturnUrlConfig, ReturnUrlService};
    use returnurl_cache::MokaTokenCache;
    use returnurl_core::{Token, TokenCache};
    use std::sync::Arc;

    fn test_service() -> ReturnUrlService<MokaTokenCache> {
        ReturnUrlService::new(MokaTokenCache::new(), ReturnUrlConfig::default())
    }

    #[tokio::test]
    async fn set_then_get_label() {
        let service = test_service();
        let t1 = service.encode("https://example.com/page?x=1").await;

        service.set_label(&t1, "Checkout").await.unwrap();

        assert_eq!(service.get_label(&t1).await.as_deref(), Some("Checkout"));
    }

    #[tokio::test]
    async fn unknown_label_is_absent() {
        let service = test_service();

        assert!(service
            .get_label(&Token::new_unchecked("nonexistent"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn set_label_overwrites() {
        let service = test_service();
        let token = Token::new_unchecked("abc123");

        service.set_label(&token, "Cart").await.unwrap();
        service.set_label(&token, "Checkout").await.unwrap();

        assert_eq!(service.get_label(&token).await.as_deref(), Some("Checkout"));
    }

    #[tokio::test]
    async fn label_is_independent_of_url_entry() {
        let cache = Arc::new(MokaTokenCache::new());
        let service = ReturnUrlService::new(Arc::clone(&cache), ReturnUrlConfig::default());
        let token = Token::new_unchecked("abc123");

        service.set_label(&token, "Orphan").await.unwrap();

        assert!(service.decode(&token).await.is_none());
        assert_eq!(
            cache
                .get("returnurl.label-abc123")
                .await
                .unwrap()
                .as_deref(),
            Some("Orphan")
        );
    }
}
