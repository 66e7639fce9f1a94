//! HTTP front door for the Pinhole URL shortener.
//!
//! Exposes `POST /shorten` and `GET /{short_code}` on top of any
//! [`Shortener`](pinhole_core::Shortener) implementation.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod validate;

pub use app::App;
pub use config::{BaseUrl, ServerSettings};
pub use state::AppState;
