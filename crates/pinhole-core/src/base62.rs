use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Symbols in index order: digits, upper-case letters, lower-case letters.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest encoding of a `u64` (`u64::MAX` needs 11 base-62 digits).
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes `value` as a positional base-62 numeral.
///
/// `0` encodes to `"0"`. Longer codes always represent larger values, and
/// codes of equal length sort the same way as the numbers they encode.
///
/// # Examples
///
/// ```
/// use pinhole_core::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::with_capacity(MAX_ENCODED_LEN);
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Returns `true` if `c` is one of the 62 symbols of [`ALPHABET`].
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// A short code encoded as a base-62 string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCodeBase62(String);

impl ShortCodeBase62 {
    /// Encodes the given sequence number.
    pub fn new(value: u64) -> Self {
        Self(encode(value))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ShortCodeBase62 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for ShortCodeBase62 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCodeBase62").field(&self.0).finish()
    }
}

impl Display for ShortCodeBase62 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortCodeBase62 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCodeBase62 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() || s.len() > MAX_ENCODED_LEN || !s.chars().all(is_symbol) {
            return Err(serde::de::Error::custom(format!(
                "not a base62 short code: '{}'",
                s
            )));
        }
        Ok(Self(s))
    }
}
