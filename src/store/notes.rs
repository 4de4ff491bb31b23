//! In-memory note store
//!
//! Owns the authoritative ordered list of notes and the global label set
//! for one session. All operations are synchronous state bookkeeping;
//! persistence is layered on top by the session (services::session).

use super::models::{now_millis, Note, NoteColor, NoteDraft, NoteUpdate, UserDocument};
use crate::error::{AppError, Result};
use std::collections::HashSet;
use uuid::Uuid;

/// Ordered note collection plus the user's label set
#[derive(Debug, Default, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    labels: Vec<String>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded user document
    pub fn from_document(doc: UserDocument) -> Self {
        Self {
            notes: doc.notes,
            labels: doc.labels,
        }
    }

    /// Replace all contents wholesale
    pub fn replace(&mut self, doc: UserDocument) {
        self.notes = doc.notes;
        self.labels = doc.labels;
    }

    /// Copy of the full state, as written to the document store
    pub fn snapshot(&self) -> UserDocument {
        UserDocument {
            notes: self.notes.clone(),
            labels: self.labels.clone(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a new note with a fresh id and current timestamps
    pub fn add(&mut self, draft: NoteDraft) -> Note {
        let now = now_millis();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            starred: draft.starred,
            labels: draft.labels,
            archived: false,
            pinned: draft.pinned,
            color: draft.color,
            checklist: draft.checklist,
            created_at: now,
            updated_at: now,
        };

        self.notes.push(note.clone());
        tracing::debug!("Added note: {}", note.id);
        note
    }

    /// Merge present fields into the matching note. Setting `starred`
    /// here does not re-partition the collection; only `toggle_star`
    /// reorders.
    pub fn update(&mut self, id: &str, update: NoteUpdate) -> Result<&Note> {
        let note = self.get_mut(id)?;

        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(starred) = update.starred {
            note.starred = starred;
        }
        if let Some(archived) = update.archived {
            note.archived = archived;
        }
        if let Some(pinned) = update.pinned {
            note.pinned = pinned;
        }
        if let Some(labels) = update.labels {
            note.labels = labels;
        }
        if let Some(color) = update.color {
            note.color = color;
        }
        if let Some(checklist) = update.checklist {
            note.checklist = checklist;
        }
        note.updated_at = now_millis();

        tracing::debug!("Updated note: {}", id);
        Ok(&*note)
    }

    /// Remove the matching note, returning it
    pub fn remove(&mut self, id: &str) -> Result<Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| AppError::NoteNotFound(id.to_string()))?;

        let note = self.notes.remove(pos);
        tracing::debug!("Removed note: {}", id);
        Ok(note)
    }

    /// Flip the starred flag, then move starred notes before unstarred
    /// ones. The partition is stable: relative order within each group
    /// is preserved.
    pub fn toggle_star(&mut self, id: &str) -> Result<bool> {
        let note = self.get_mut(id)?;
        note.starred = !note.starred;
        note.updated_at = now_millis();
        let starred = note.starred;

        self.notes.sort_by_key(|n| !n.starred);

        tracing::debug!("Toggled star on note {}: {}", id, starred);
        Ok(starred)
    }

    pub fn toggle_archive(&mut self, id: &str) -> Result<bool> {
        let note = self.get_mut(id)?;
        note.archived = !note.archived;
        note.updated_at = now_millis();
        Ok(note.archived)
    }

    pub fn archive(&mut self, id: &str) -> Result<()> {
        let note = self.get_mut(id)?;
        note.archived = true;
        note.updated_at = now_millis();
        Ok(())
    }

    pub fn restore(&mut self, id: &str) -> Result<()> {
        let note = self.get_mut(id)?;
        note.archived = false;
        note.updated_at = now_millis();
        Ok(())
    }

    /// Flip the pinned flag; does not affect collection order
    pub fn toggle_pin(&mut self, id: &str) -> Result<bool> {
        let note = self.get_mut(id)?;
        note.pinned = !note.pinned;
        note.updated_at = now_millis();
        Ok(note.pinned)
    }

    pub fn set_color(&mut self, id: &str, color: Option<NoteColor>) -> Result<()> {
        let note = self.get_mut(id)?;
        note.color = color;
        note.updated_at = now_millis();
        Ok(())
    }

    /// Flip the completed flag on one checklist item
    pub fn toggle_checklist_item(&mut self, note_id: &str, item_id: &str) -> Result<bool> {
        let note = self.get_mut(note_id)?;

        let item = note
            .checklist
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| {
                AppError::Generic(format!(
                    "Checklist item {} not found on note {}",
                    item_id, note_id
                ))
            })?;

        item.completed = !item.completed;
        let completed = item.completed;
        note.updated_at = now_millis();
        Ok(completed)
    }

    /// Insert a label into the global set if absent. Case-sensitive, no
    /// normalization. Returns whether the label was new.
    pub fn add_label(&mut self, label: &str) -> bool {
        if self.labels.iter().any(|l| l == label) {
            return false;
        }
        self.labels.push(label.to_string());
        tracing::debug!("Added label: {}", label);
        true
    }

    /// Delete a label from the global set and strip it from every note.
    /// Stripping does not bump updated_at.
    pub fn remove_label(&mut self, label: &str) -> Result<()> {
        let pos = self
            .labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| AppError::LabelNotFound(label.to_string()))?;
        self.labels.remove(pos);

        for note in &mut self.notes {
            note.labels.retain(|l| l != label);
        }

        tracing::debug!("Removed label: {}", label);
        Ok(())
    }

    /// Move the note at `from` to position `to`, shifting the notes in
    /// between. Manual drag ordering, independent of star partitioning.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.notes.len();
        if from >= len || to >= len {
            return Err(AppError::InvalidReorder { from, to, len });
        }

        let note = self.notes.remove(from);
        self.notes.insert(to, note);
        Ok(())
    }

    /// Star every listed note in one pass, then re-partition. Ids not
    /// present in the collection are skipped.
    pub fn star_many(&mut self, ids: &HashSet<String>) {
        let now = now_millis();
        for note in &mut self.notes {
            if ids.contains(&note.id) && !note.starred {
                note.starred = true;
                note.updated_at = now;
            }
        }
        self.notes.sort_by_key(|n| !n.starred);
    }

    /// Archive every listed note in one pass
    pub fn archive_many(&mut self, ids: &HashSet<String>) {
        let now = now_millis();
        for note in &mut self.notes {
            if ids.contains(&note.id) && !note.archived {
                note.archived = true;
                note.updated_at = now;
            }
        }
    }

    /// Remove every listed note in one pass
    pub fn remove_many(&mut self, ids: &HashSet<String>) {
        self.notes.retain(|n| !ids.contains(&n.id));
    }

    /// Bulk append, used by import. Ids are taken as-is; the caller is
    /// responsible for the collision caveat documented on the session's
    /// import operation.
    pub fn append(&mut self, notes: Vec<Note>) {
        self.notes.extend(notes);
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NoteNotFound(id.to_string()))
    }
}
