//! Core types and traits for return URL tokens.
//!
//! This crate provides the token type, the checksum and base-62 encoding
//! used to derive tokens, and the two seams a host environment plugs into:
//! the [`TokenCache`] storing token entries and the [`RequestFields`]
//! view of an inbound request.

pub mod base62;
pub mod cache;
pub mod checksum;
pub mod error;
pub mod request;
pub mod token;

pub use cache::TokenCache;
pub use checksum::{Checksum, Crc32};
pub use error::{CacheError, Result};
pub use request::{FieldValue, RequestData, RequestFields};
pub use token::Token;
