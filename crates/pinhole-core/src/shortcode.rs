use crate::base62::{self, ShortCodeBase62, MAX_ENCODED_LEN};
use crate::error::ShortenerError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short code identifying a shortened URL.
///
/// Codes are 1-11 characters drawn from the base-62 alphabet, which is
/// exactly the range a sequence counter can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a `ShortCode` from a value that can be converted into
    /// [`ShortCodeBase62`], such as a sequence number.
    pub fn generated(code: impl Into<ShortCodeBase62>) -> Self {
        Self(code.into().as_str().to_owned())
    }

    /// Creates a new `ShortCode` after validating the input.
    ///
    /// Used for codes arriving from outside the process, e.g. a request path.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, ShortenerError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Appends the code to `base_url`, which is expected to end with `/`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), ShortenerError> {
        if code.is_empty() || code.len() > MAX_ENCODED_LEN {
            return Err(ShortenerError::InvalidShortCode(format!(
                "length must be between 1 and {}, got {}",
                MAX_ENCODED_LEN,
                code.len()
            )));
        }

        if !code.chars().all(base62::is_symbol) {
            return Err(ShortenerError::InvalidShortCode(format!(
                "must contain only base62 characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl From<ShortCodeBase62> for ShortCode {
    fn from(code: ShortCodeBase62) -> Self {
        Self::generated(code)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
