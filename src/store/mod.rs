//! Note store module
//!
//! This module provides the in-memory note collection:
//! - Model definitions
//! - The ordered note store with label bookkeeping

pub mod models;
pub mod notes;

pub use models::*;
pub use notes::NoteStore;
