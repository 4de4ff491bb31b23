//! Document store seam
//!
//! The engine persists one wholesale document per user. Backends only
//! need load/save; save must merge at the field level, leaving anything
//! else stored for the user untouched.

use crate::error::Result;
use crate::store::UserDocument;
use async_trait::async_trait;

/// Per-user document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the user's document. `Ok(None)` when the user has no data yet.
    async fn load(&self, user_id: &str) -> Result<Option<UserDocument>>;

    /// Write the full notes/labels snapshot for the user. Only the
    /// notes and labels fields are replaced; other per-user fields the
    /// backend may hold survive the write.
    async fn save(&self, user_id: &str, doc: &UserDocument) -> Result<()>;
}
