pub mod memory;

pub use memory::InMemoryRepository;
pub use pinhole_core::{ReadRepository, Repository, StorageError, UrlRecord};
