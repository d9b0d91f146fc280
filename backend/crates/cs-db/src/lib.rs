pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::registry_pool::{open_memory_pool, open_pool};
pub use error::{DbError, Result};
pub use repositories::name_registry_repository::{BindOutcome, NameRegistryRepository};
