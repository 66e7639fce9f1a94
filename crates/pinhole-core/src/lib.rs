//! Core types and traits for the Pinhole URL shortener.
//!
//! This crate provides the shared vocabulary used by the generator, the
//! storage backend, the shortening service and the HTTP gateway.

pub mod base62;
pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use base62::ShortCodeBase62;
pub use error::{GeneratorError, ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
