//! Storage module
//!
//! Per-user document persistence: the store trait plus the SQLite and
//! in-memory backends.

pub mod document_store;
pub mod memory;
pub mod sqlite;

pub use document_store::DocumentStore;
pub use memory::MemoryDocumentStore;
pub use sqlite::{create_pool, initialize_schema, SqliteDocumentStore};
