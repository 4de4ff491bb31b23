//! Error types for the QuillCove engine
//!
//! All errors use thiserror for structured error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Label not found: {0}")]
    LabelNotFound(String),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("Note title and content must not be empty")]
    EmptyNote,

    #[error("Invalid reorder: {from} -> {to} (collection has {len} notes)")]
    InvalidReorder { from: usize, to: usize, len: usize },

    #[error("{0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
