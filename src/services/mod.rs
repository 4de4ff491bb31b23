//! Services module
//!
//! Session lifecycle, debounced sync, filtering, bulk selection, and the
//! import/export codec layered over the note store.

pub mod export;
pub mod filter;
pub mod selection;
pub mod session;
pub mod sync;

pub use export::ExportFormat;
pub use filter::Category;
pub use selection::Selection;
pub use session::Session;
pub use sync::SyncScheduler;
