use crate::error::Result;
use crate::shortcode::ShortCode;

pub trait Shortener: Send + Sync + 'static {
    /// Returns the short code for `long_url`, creating one on first use.
    ///
    /// Repeated calls with the same URL return the same code.
    fn shorten(&self, long_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to the URL it was created for.
    ///
    /// A miss is reported as [`ShortenerError::NotFound`](crate::ShortenerError::NotFound).
    fn resolve(&self, code: &ShortCode) -> Result<String>;

    /// Number of URLs shortened so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
