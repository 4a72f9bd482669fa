use serde::Deserialize;
use typed_builder::TypedBuilder;

/// Field name carrying the token in links and forms.
pub const DEFAULT_REQUEST_KEY: &str = "ru";

/// Where to send the user when neither a token nor a fallback resolves.
pub const DEFAULT_HOME_URL: &str = "/";

/// Namespace of label entries in the cache.
pub const LABEL_KEY_PREFIX: &str = "returnurl.label";

/// Settings for a [`ReturnUrlService`](crate::ReturnUrlService).
///
/// # Example
///
/// ```rust
/// use returnurl_service::ReturnUrlConfig;
///
/// let config = ReturnUrlConfig::builder()
///     .request_key("back".to_string())
///     .home_url("/dashboard".to_string())
///     .build();
/// assert_eq!(config.request_key, "back");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Deserialize)]
#[serde(default)]
pub struct ReturnUrlConfig {
    /// Request field holding the token; also the namespace of URL entries.
    #[builder(default = DEFAULT_REQUEST_KEY.to_string())]
    pub request_key: String,

    #[builder(default = DEFAULT_HOME_URL.to_string())]
    pub home_url: String,
}

impl Default for ReturnUrlConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
