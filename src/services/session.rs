//! User session
//!
//! High-level facade tying the in-memory note store to the document
//! store for one signed-in user. The user's document is loaded wholesale
//! on sign-in; every mutation updates the store and schedules one
//! debounced flush carrying the complete post-mutation snapshot.

use super::export::{self, ExportFormat};
use super::selection::Selection;
use super::sync::SyncScheduler;
use crate::config::SYNC_DEBOUNCE;
use crate::error::{AppError, Result};
use crate::storage::DocumentStore;
use crate::store::{Note, NoteColor, NoteDraft, NoteStore, NoteUpdate};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;

/// A signed-in user's working session
pub struct Session {
    user_id: String,
    store: NoteStore,
    sync: SyncScheduler,
}

impl Session {
    /// Load the user's document and open a session with the default
    /// debounce delay.
    pub async fn sign_in(
        user_id: impl Into<String>,
        documents: Arc<dyn DocumentStore>,
    ) -> Result<Self> {
        Self::sign_in_with_debounce(user_id, documents, SYNC_DEBOUNCE).await
    }

    /// Load the user's document and open a session. A user with no
    /// stored document starts empty.
    pub async fn sign_in_with_debounce(
        user_id: impl Into<String>,
        documents: Arc<dyn DocumentStore>,
        debounce: Duration,
    ) -> Result<Self> {
        let user_id = user_id.into();
        tracing::info!("Signing in user: {}", user_id);

        let store = match documents.load(&user_id).await? {
            Some(doc) => NoteStore::from_document(doc),
            None => NoteStore::new(),
        };

        tracing::info!(
            "Session opened for {}: {} notes, {} labels",
            user_id,
            store.len(),
            store.labels().len()
        );

        let sync = SyncScheduler::new(user_id.clone(), documents, debounce);

        Ok(Self {
            user_id,
            store,
            sync,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn labels(&self) -> &[String] {
        self.store.labels()
    }

    pub fn get_note(&self, id: &str) -> Option<&Note> {
        self.store.get(id)
    }

    /// Create a note. Title and content must both be non-blank; the
    /// store itself stays permissive, the gate lives here.
    pub fn create_note(&mut self, draft: NoteDraft) -> Result<Note> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            return Err(AppError::EmptyNote);
        }

        tracing::info!("Creating new note: {}", draft.title);
        let note = self.store.add(draft);
        self.flush();
        Ok(note)
    }

    pub fn update_note(&mut self, id: &str, update: NoteUpdate) -> Result<Note> {
        let note = self.store.update(id, update)?.clone();
        self.flush();
        Ok(note)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<()> {
        tracing::info!("Deleting note: {}", id);
        self.store.remove(id)?;
        self.flush();
        Ok(())
    }

    pub fn toggle_star(&mut self, id: &str) -> Result<bool> {
        let starred = self.store.toggle_star(id)?;
        self.flush();
        Ok(starred)
    }

    pub fn toggle_archive(&mut self, id: &str) -> Result<bool> {
        let archived = self.store.toggle_archive(id)?;
        self.flush();
        Ok(archived)
    }

    pub fn archive_note(&mut self, id: &str) -> Result<()> {
        self.store.archive(id)?;
        self.flush();
        Ok(())
    }

    pub fn restore_note(&mut self, id: &str) -> Result<()> {
        self.store.restore(id)?;
        self.flush();
        Ok(())
    }

    pub fn toggle_pin(&mut self, id: &str) -> Result<bool> {
        let pinned = self.store.toggle_pin(id)?;
        self.flush();
        Ok(pinned)
    }

    pub fn set_color(&mut self, id: &str, color: Option<NoteColor>) -> Result<()> {
        self.store.set_color(id, color)?;
        self.flush();
        Ok(())
    }

    pub fn toggle_checklist_item(&mut self, note_id: &str, item_id: &str) -> Result<bool> {
        let completed = self.store.toggle_checklist_item(note_id, item_id)?;
        self.flush();
        Ok(completed)
    }

    pub fn add_label(&mut self, label: &str) {
        if self.store.add_label(label) {
            self.flush();
        }
    }

    pub fn remove_label(&mut self, label: &str) -> Result<()> {
        self.store.remove_label(label)?;
        self.flush();
        Ok(())
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.store.reorder(from, to)?;
        self.flush();
        Ok(())
    }

    // ===== Bulk operations =====
    //
    // Each batch is one combined store pass and one flush, then the
    // selection is cleared.

    pub fn star_selected(&mut self, selection: &mut Selection) {
        if selection.is_empty() {
            return;
        }
        tracing::info!("Starring {} selected notes", selection.len());
        self.store.star_many(selection.ids());
        selection.clear();
        self.flush();
    }

    pub fn archive_selected(&mut self, selection: &mut Selection) {
        if selection.is_empty() {
            return;
        }
        tracing::info!("Archiving {} selected notes", selection.len());
        self.store.archive_many(selection.ids());
        selection.clear();
        self.flush();
    }

    pub fn delete_selected(&mut self, selection: &mut Selection) {
        if selection.is_empty() {
            return;
        }
        tracing::info!("Deleting {} selected notes", selection.len());
        self.store.remove_many(selection.ids());
        selection.clear();
        self.flush();
    }

    // ===== Import/export =====

    /// Structured export of the full collection
    pub fn export_json(&self) -> Result<String> {
        export::to_json(self.store.notes())
    }

    /// Structured export of only the selected notes
    pub fn export_selected_json(&self, selection: &Selection) -> Result<String> {
        let selected: Vec<Note> = self
            .store
            .notes()
            .iter()
            .filter(|n| selection.is_selected(&n.id))
            .cloned()
            .collect();
        export::to_json(&selected)
    }

    /// One-way human-readable export
    pub fn export_markdown(&self) -> String {
        export::to_markdown(self.store.notes())
    }

    /// Write an export under `dir` with a dated filename, returning the
    /// path written.
    pub async fn export_to_file(&self, dir: &Path, format: ExportFormat) -> Result<PathBuf> {
        let contents = match format {
            ExportFormat::Json => self.export_json()?,
            ExportFormat::Markdown => self.export_markdown(),
        };

        fs::create_dir_all(dir).await?;
        let path = dir.join(export::export_filename(format));
        fs::write(&path, contents).await?;

        tracing::info!("Exported {} notes to {:?}", self.store.len(), path);
        Ok(path)
    }

    /// Parse a structured export and append its notes to the collection.
    /// Malformed input fails without mutating any state. Imported ids are
    /// appended as-is: re-importing an export of this collection reuses
    /// ids and can collide with existing notes.
    pub fn import_notes(&mut self, data: &str) -> Result<usize> {
        let notes = export::from_json(data)?;
        let count = notes.len();

        self.store.append(notes);
        self.flush();

        tracing::info!("Imported {} notes for user {}", count, self.user_id);
        Ok(count)
    }

    /// Read and import a structured export file
    pub async fn import_from_file(&mut self, path: &Path) -> Result<usize> {
        let data = fs::read_to_string(path).await?;
        self.import_notes(&data)
    }

    // ===== Lifecycle =====

    /// Write the current snapshot immediately, bypassing the debounce
    pub async fn save_now(&mut self) -> Result<()> {
        let snapshot = self.store.snapshot();
        self.sync.flush_now(snapshot).await
    }

    /// End the session. A pending debounced write is cancelled and
    /// dropped, not flushed.
    pub fn close(mut self) {
        tracing::info!("Closing session for user: {}", self.user_id);
        self.sync.cancel();
    }

    fn flush(&mut self) {
        self.sync.schedule(self.store.snapshot());
    }
}
