//! Debounced sync scheduler
//!
//! Collapses bursts of mutations into a single write to the document
//! store. Each call to [`SyncScheduler::schedule`] replaces any pending
//! timer, so at most one flush is outstanding at a time and the write
//! that eventually fires carries the newest snapshot.

use crate::error::Result;
use crate::storage::DocumentStore;
use crate::store::UserDocument;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Owns the single outstanding flush timer for a session
pub struct SyncScheduler {
    user_id: String,
    store: Arc<dyn DocumentStore>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SyncScheduler {
    pub fn new(user_id: String, store: Arc<dyn DocumentStore>, delay: Duration) -> Self {
        Self {
            user_id,
            store,
            delay,
            pending: None,
        }
    }

    /// Schedule a flush of the given snapshot, superseding any pending
    /// one. When the timer fires uninterrupted, one save is issued; a
    /// failed save is logged and not retried — the next mutation's flush
    /// resends the full, newer state.
    pub fn schedule(&mut self, snapshot: UserDocument) {
        self.cancel();

        let user_id = self.user_id.clone();
        let store = Arc::clone(&self.store);
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Timer elapsed: the write is committed. It runs detached so
            // a cancel arriving mid-save no longer drops it.
            tokio::spawn(async move {
                if let Err(e) = store.save(&user_id, &snapshot).await {
                    tracing::error!("Failed to sync document for user {}: {}", user_id, e);
                }
            });
        }));
    }

    /// Drop a pending flush whose timer has not yet fired. A session
    /// that ends inside the debounce window loses its last burst of
    /// edits — at-most-once, best-effort. A save already past its timer
    /// runs to completion.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Bypass the debounce and write the snapshot immediately, dropping
    /// any pending timer. Used for explicit saves.
    pub async fn flush_now(&mut self, snapshot: UserDocument) -> Result<()> {
        self.cancel();
        self.store.save(&self.user_id, &snapshot).await
    }
}

impl Drop for SyncScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
