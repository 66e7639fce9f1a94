use pinhole_core::{Repository, ShortCode, Shortener, ShortenerError, UrlRecord};
use pinhole_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - deduplication of URLs that were already shortened
/// - short code generation for new URLs
/// - resolution of short codes back to URLs
///
/// Note: generating a code and saving it are separate steps. If a save is
/// rejected the error is returned as is; no fresh code is tried.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService`.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn generate_code(&self) -> Result<ShortCode, ShortenerError> {
        Ok(self.generator.generate()?.into())
    }
}

impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    fn shorten(&self, long_url: &str) -> Result<ShortCode, ShortenerError> {
        if let Some(existing) = self.repository.get_short_code(long_url) {
            debug!(code = %existing, url = %long_url, "url already shortened");
            return Ok(existing);
        }

        let short_code = self.generate_code()?;

        self.repository
            .save(UrlRecord::new(short_code.clone(), long_url))
            .map_err(|e| {
                warn!(code = %short_code, url = %long_url, error = %e, "failed to save url mapping");
                ShortenerError::from(e)
            })?;

        info!(code = %short_code, url = %long_url, "shortened url");
        Ok(short_code)
    }

    fn resolve(&self, code: &ShortCode) -> Result<String, ShortenerError> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code) {
            Some(long_url) => {
                debug!(code = %code, url = %long_url, "resolved short code");
                Ok(long_url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ShortenerError::NotFound(code.to_string()))
            }
        }
    }

    fn len(&self) -> usize {
        self.repository.len()
    }
}
