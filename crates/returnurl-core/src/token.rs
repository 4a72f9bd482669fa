use crate::base62;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// Offset added to every checksum so that the encoded integer never
/// depends on a signed reading of the 32-bit value.
const CHECKSUM_OFFSET: u64 = 1 << 32;

/// A short opaque token standing in for a URL.
///
/// Tokens derived with [`Token::from_checksum`] are six base-62 characters.
/// Tokens read back from a request are carried unchecked: whatever the
/// client sent (after sanitizing) is looked up as-is.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(SmolStr);

impl Token {
    /// Derives a token from a 32-bit checksum.
    ///
    /// The checksum is read as unsigned, offset by 2^32 and written in
    /// base 62, so every token lies between `4GFfc4` and `9nkuo7`.
    pub fn from_checksum(checksum: u32) -> Self {
        let value = CHECKSUM_OFFSET + u64::from(checksum);
        Self(SmolStr::new(base62::encode(value)))
    }

    /// Creates a token without validation.
    pub fn new_unchecked(token: impl AsRef<str>) -> Self {
        Self(SmolStr::new(token))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&self.0).finish()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
