//! URL shortener service implementation.
//!
//! This crate ties a [`Repository`](pinhole_core::Repository) and a
//! [`Generator`](pinhole_generator::Generator) together into a
//! [`Shortener`]. Core types are re-exported from `pinhole_core`.

pub mod service;

pub use pinhole_core::{ShortCode, Shortener, ShortenerError};
pub use service::ShortenerService;
