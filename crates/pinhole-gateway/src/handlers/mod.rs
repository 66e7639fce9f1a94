mod health;
mod url;

pub use health::health_handler;
pub use self::url::{missing_code_handler, redirect_handler, shorten_handler};
