//! Note store models
//!
//! Rust structs representing the user's note data. Field names serialize
//! as camelCase to match the remote document shape, so an exported file
//! is byte-compatible with what the document store holds.

use serde::{Deserialize, Serialize};

/// Timestamps are Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A single user-authored note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub starred: bool,
    pub labels: Vec<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One entry of a note's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Accent color assignable to a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

/// Fields supplied when creating a note; id and timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub color: Option<NoteColor>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub starred: Option<bool>,
    pub archived: Option<bool>,
    pub pinned: Option<bool>,
    pub labels: Option<Vec<String>>,
    pub color: Option<Option<NoteColor>>,
    pub checklist: Option<Vec<ChecklistItem>>,
}

/// The wholesale per-user document held by the remote store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    pub notes: Vec<Note>,
    pub labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_wire_shape_is_camel_case() {
        let note = Note {
            id: "n1".into(),
            title: "Groceries".into(),
            content: "Buy Milk".into(),
            starred: false,
            labels: vec!["home".into()],
            archived: false,
            pinned: false,
            color: Some(NoteColor::Blue),
            checklist: vec![],
            created_at: 1,
            updated_at: 2,
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["createdAt"], 1);
        assert_eq!(json["updatedAt"], 2);
        assert_eq!(json["color"], "blue");
        assert!(json.get("checklist").is_none());
    }

    #[test]
    fn test_note_optional_fields_default() {
        // Documents written by older clients omit archived/pinned/checklist
        let json = r#"{
            "id": "n1",
            "title": "T",
            "content": "C",
            "starred": true,
            "labels": [],
            "createdAt": 5,
            "updatedAt": 5
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();
        assert!(!note.archived);
        assert!(!note.pinned);
        assert!(note.color.is_none());
        assert!(note.checklist.is_empty());
    }
}
