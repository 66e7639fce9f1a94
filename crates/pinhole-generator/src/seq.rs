use crate::Generator;
use pinhole_core::{GeneratorError, ShortCodeBase62};
use std::sync::Mutex;

/// A short code generator backed by a sequential counter.
///
/// Every call bumps the counter by one and encodes the new value in base 62,
/// so the first code is `"1"`, the 62nd is `"10"`, and so on. Codes are
/// unique within a single instance for as long as the counter does not
/// overflow; separate instances (or processes) will hand out the same codes.
#[derive(Debug, Default)]
pub struct SeqGenerator {
    counter: Mutex<i64>,
}

impl SeqGenerator {
    /// Creates a generator whose first code encodes `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that resumes after `offset`.
    ///
    /// The first code encodes `offset + 1`. Negative offsets are treated as 0.
    pub fn with_offset(offset: i64) -> Self {
        Self {
            counter: Mutex::new(offset.max(0)),
        }
    }

    /// The counter value behind the most recently issued code, or the
    /// starting offset if nothing has been issued yet.
    pub fn current(&self) -> i64 {
        match self.counter.lock() {
            Ok(counter) => *counter,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn next_value(&self) -> Result<i64, GeneratorError> {
        let mut counter = self
            .counter
            .lock()
            .map_err(|_| GeneratorError::StatePoisoned)?;
        let next = counter.checked_add(1).ok_or(GeneratorError::Exhausted)?;
        *counter = next;
        Ok(next)
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCodeBase62;

    fn generate(&self) -> Result<Self::Output, GeneratorError> {
        // The counter starts non-negative and only grows, so `next` is positive.
        let next = self.next_value()?;
        Ok(ShortCodeBase62::new(next as u64))
    }
}
