mod health;
mod url;

pub use health::HealthResponse;
pub use self::url::{ErrorResponse, ShortenRequest, ShortenResponse};
