pub mod seq;

use pinhole_core::{GeneratorError, ShortCode};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates a value that converts into a short code no earlier call
    /// on this instance has produced.
    fn generate(&self) -> Result<Self::Output, GeneratorError>;
}
