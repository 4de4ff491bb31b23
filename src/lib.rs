//! QuillCove engine
//!
//! Core of a personal note-taking application: an in-memory note store
//! with star/archive/label/checklist bookkeeping, pure filter and search
//! projections, bulk selection, a JSON/Markdown import/export codec, and
//! debounced wholesale persistence of the per-user document to a
//! pluggable backing store.

pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{AppError, Result};
pub use services::{Category, ExportFormat, Selection, Session};
pub use storage::{DocumentStore, MemoryDocumentStore, SqliteDocumentStore};
pub use store::{Note, NoteDraft, NoteStore, NoteUpdate, UserDocument};
