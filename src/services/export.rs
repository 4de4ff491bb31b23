//! Import/export codec
//!
//! Serializes the note collection for backup and transfer. The JSON
//! form is lossless and re-importable; the Markdown rendering is a
//! one-way human-readable export.

use crate::config::EXPORT_FILE_PREFIX;
use crate::error::{AppError, Result};
use crate::store::Note;
use chrono::Utc;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Dated download filename, e.g. "quillcove-notes-2026-08-26.json"
pub fn export_filename(format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        EXPORT_FILE_PREFIX,
        Utc::now().format("%Y-%m-%d"),
        format.extension()
    )
}

/// Lossless structured export: the note array, pretty-printed
pub fn to_json(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

/// Parse an uploaded structured export back into note records.
/// Malformed input fails without producing any partial result.
pub fn from_json(data: &str) -> Result<Vec<Note>> {
    serde_json::from_str(data).map_err(|e| AppError::InvalidImport(e.to_string()))
}

/// Human-readable rendering: heading, body, optional label line,
/// optional checklist lines, starred marker, joined with separators.
pub fn to_markdown(notes: &[Note]) -> String {
    let mut markdown = String::from("# QuillCove Notes Export\n\n");
    markdown.push_str(&format!("Exported on: {}\n\n---\n\n", Utc::now().to_rfc2822()));

    for note in notes {
        markdown.push_str(&format!("## {}\n\n", note.title));
        markdown.push_str(&format!("{}\n\n", note.content));

        if !note.labels.is_empty() {
            markdown.push_str(&format!("**Labels:** {}\n\n", note.labels.join(", ")));
        }

        if !note.checklist.is_empty() {
            markdown.push_str("**Checklist:**\n");
            for item in &note.checklist {
                let mark = if item.completed { 'x' } else { ' ' };
                markdown.push_str(&format!("- [{}] {}\n", mark, item.text));
            }
            markdown.push('\n');
        }

        if note.starred {
            markdown.push_str("⭐ **Starred**\n\n");
        }

        markdown.push_str("---\n\n");
    }

    markdown
}
