//! In-memory document store
//!
//! Backend for ephemeral sessions and tests. Tracks how many saves have
//! been issued so debounce coalescing can be asserted on.

use super::document_store::DocumentStore;
use crate::error::Result;
use crate::store::UserDocument;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<String, UserDocument>>,
    save_count: AtomicUsize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of saves issued, across all users
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load(&self, user_id: &str) -> Result<Option<UserDocument>> {
        let documents = self.documents.lock().unwrap();
        Ok(documents.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, doc: &UserDocument) -> Result<()> {
        let mut documents = self.documents.lock().unwrap();
        documents.insert(user_id.to_string(), doc.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);

        tracing::debug!("Saved in-memory document for user: {}", user_id);
        Ok(())
    }
}
