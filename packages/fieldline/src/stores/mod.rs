//! Storage implementations.

mod memory;

pub use memory::MemoryStore;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
