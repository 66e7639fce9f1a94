use parking_lot::RwLock;
use pinhole_core::{ReadRepository, Repository, ShortCode, StorageError, UrlRecord};
use std::collections::HashMap;
use tracing::trace;

/// Both projections of the record set. Only ever touched under one lock.
#[derive(Debug, Default)]
struct Mappings {
    short_to_long: HashMap<ShortCode, String>,
    long_to_short: HashMap<String, ShortCode>,
}

/// In-memory implementation of the Repository trait.
///
/// The forward (code -> URL) and reverse (URL -> code) maps sit behind a
/// single `RwLock`, so lookups run in parallel while a save holds the lock
/// exclusively for its whole check-and-insert. The two maps therefore never
/// disagree, even transiently.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    mappings: RwLock<Mappings>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mappings: RwLock::new(Mappings {
                short_to_long: HashMap::with_capacity(capacity),
                long_to_short: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Copies out every stored record. Order is unspecified.
    pub fn records(&self) -> Vec<UrlRecord> {
        self.mappings
            .read()
            .short_to_long
            .iter()
            .map(|(code, url)| UrlRecord::new(code.clone(), url.clone()))
            .collect()
    }
}

impl ReadRepository for InMemoryRepository {
    fn get(&self, code: &ShortCode) -> Option<String> {
        self.mappings.read().short_to_long.get(code).cloned()
    }

    fn get_short_code(&self, long_url: &str) -> Option<ShortCode> {
        self.mappings.read().long_to_short.get(long_url).cloned()
    }

    fn len(&self) -> usize {
        self.mappings.read().short_to_long.len()
    }
}

impl Repository for InMemoryRepository {
    fn save(&self, record: UrlRecord) -> Result<(), StorageError> {
        let mut mappings = self.mappings.write();

        if mappings.short_to_long.contains_key(&record.short_code) {
            return Err(StorageError::DuplicateShortCode(
                record.short_code.to_string(),
            ));
        }
        if mappings.long_to_short.contains_key(&record.long_url) {
            return Err(StorageError::DuplicateLongUrl(record.long_url));
        }

        trace!(code = %record.short_code, url = %record.long_url, "saving url mapping");
        mappings
            .short_to_long
            .insert(record.short_code.clone(), record.long_url.clone());
        mappings
            .long_to_short
            .insert(record.long_url, record.short_code);
        Ok(())
    }
}
