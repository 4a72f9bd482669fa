//! Return URL service.
//!
//! A page asks the [`ReturnUrlService`] for a token standing in for its own
//! URL and embeds it in a link or hidden form field. When the link is
//! followed or the form submitted, the handler resolves the token from the
//! request back to the original URL and redirects there. Each browser tab
//! carries its own token, so several flows can be in progress at once.
//!
//! # Example
//!
//! ```rust
//! use returnurl_cache::MokaTokenCache;
//! use returnurl_core::RequestData;
//! use returnurl_service::{ReturnUrlConfig, ReturnUrlService};
//!
//! # async fn example() {
//! let service = ReturnUrlService::new(MokaTokenCache::new(), ReturnUrlConfig::default());
//!
//! // On the page the user should come back to
//! let token = service.encode("/orders?page=3").await;
//!
//! // Later, in the handler receiving `ru=<token>`
//! let request = RequestData::new().with_query("ru", token.as_str());
//! let url = service.resolve_url(&request, None).await;
//! assert_eq!(url, "/orders?page=3");
//! # }
//! ```

pub mod config;
pub mod extractor;
mod label;
pub mod memo;
pub mod service;

pub use config::ReturnUrlConfig;
pub use memo::TokenMemo;
pub use service::ReturnUrlService;
