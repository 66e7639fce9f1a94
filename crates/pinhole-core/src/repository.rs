use crate::error::StorageError;
use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// A stored mapping between a short code and the URL it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The code handed out to clients.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub long_url: String,
}

impl UrlRecord {
    pub fn new(short_code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            short_code,
            long_url: long_url.into(),
        }
    }
}

/// A read-only view of a repository.
///
/// Lookups never fail; a miss is reported as `None`.
pub trait ReadRepository: Send + Sync + 'static {
    /// Looks up the long URL stored under `code`.
    fn get(&self, code: &ShortCode) -> Option<String>;

    /// Looks up the short code already assigned to `long_url`.
    fn get_short_code(&self, long_url: &str) -> Option<ShortCode>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait Repository: ReadRepository {
    /// Stores `record` under both its short code and its long URL.
    ///
    /// Fails without storing anything if either key is already taken.
    fn save(&self, record: UrlRecord) -> Result<(), StorageError>;
}
