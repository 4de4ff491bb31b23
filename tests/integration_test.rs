//! Integration tests for the QuillCove engine
//!
//! These tests verify end-to-end functionality including:
//! - Session lifecycle against the SQLite document store
//! - Debounced flush behavior
//! - Filtering over a live session
//! - Export/import round trips through real files

use quillcove::services::filter::{visible_notes, Category};
use quillcove::services::Selection;
use quillcove::store::{NoteDraft, NoteUpdate};
use quillcove::{DocumentStore, ExportFormat, Session, SqliteDocumentStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to create a disk-backed document store
async fn create_test_store() -> (Arc<SqliteDocumentStore>, TempDir) {
    quillcove::logging::init();

    let temp_dir = TempDir::new().unwrap();
    let store = SqliteDocumentStore::open(&temp_dir.path().join("test.sqlite"))
        .await
        .unwrap();

    (Arc::new(store), temp_dir)
}

async fn open_session(store: &Arc<SqliteDocumentStore>) -> Session {
    Session::sign_in_with_debounce(
        "alice",
        Arc::clone(store) as Arc<dyn DocumentStore>,
        Duration::from_millis(50),
    )
    .await
    .unwrap()
}

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_session_persists_across_sign_ins() {
    let (store, _temp) = create_test_store().await;

    {
        let mut session = open_session(&store).await;

        let note = session.create_note(draft("Groceries", "Buy Milk")).unwrap();
        session.add_label("home");
        session
            .update_note(
                &note.id,
                NoteUpdate {
                    labels: Some(vec!["home".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();
        session.toggle_star(&note.id).unwrap();

        session.save_now().await.unwrap();
        session.close();
    }

    let session = open_session(&store).await;

    assert_eq!(session.notes().len(), 1);
    let note = &session.notes()[0];
    assert_eq!(note.title, "Groceries");
    assert!(note.starred);
    assert_eq!(note.labels, vec!["home"]);
    assert_eq!(session.labels(), &["home"]);
}

#[tokio::test]
async fn test_debounced_flush_reaches_disk() {
    let (store, _temp) = create_test_store().await;

    let mut session = open_session(&store).await;
    session.create_note(draft("One", "1")).unwrap();
    session.create_note(draft("Two", "2")).unwrap();

    // Wait out the 50ms debounce window
    tokio::time::sleep(Duration::from_millis(200)).await;

    let doc = store.load("alice").await.unwrap().unwrap();
    assert_eq!(doc.notes.len(), 2);
}

#[tokio::test]
async fn test_closing_inside_debounce_window_loses_last_burst() {
    let (store, _temp) = create_test_store().await;

    {
        let mut session = open_session(&store).await;
        session.create_note(draft("Kept", "k")).unwrap();
        session.save_now().await.unwrap();

        session.create_note(draft("Dropped", "d")).unwrap();
        session.close();
    }

    tokio::time::sleep(Duration::from_millis(200)).await;

    let doc = store.load("alice").await.unwrap().unwrap();
    assert_eq!(doc.notes.len(), 1);
    assert_eq!(doc.notes[0].title, "Kept");
}

#[tokio::test]
async fn test_filter_over_live_session() {
    let (store, _temp) = create_test_store().await;
    let mut session = open_session(&store).await;

    session.create_note(draft("Groceries", "Buy Milk")).unwrap();
    let taxes = session.create_note(draft("Taxes", "File returns")).unwrap();
    session.archive_note(&taxes.id).unwrap();

    let active = visible_notes(session.notes(), "", &Category::All, false);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Groceries");

    let by_query = visible_notes(session.notes(), "milk", &Category::All, false);
    assert_eq!(by_query.len(), 1);

    let archived = visible_notes(session.notes(), "", &Category::All, true);
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].title, "Taxes");
}

#[tokio::test]
async fn test_export_import_round_trip_through_files() {
    let (store, _temp) = create_test_store().await;
    let export_dir = TempDir::new().unwrap();

    let mut session = open_session(&store).await;
    session.create_note(draft("Groceries", "Buy Milk")).unwrap();
    session.create_note(draft("Taxes", "File returns")).unwrap();

    let json_path = session
        .export_to_file(export_dir.path(), ExportFormat::Json)
        .await
        .unwrap();
    let md_path = session
        .export_to_file(export_dir.path(), ExportFormat::Markdown)
        .await
        .unwrap();

    assert!(json_path.exists());
    let markdown = std::fs::read_to_string(&md_path).unwrap();
    assert!(markdown.contains("## Groceries"));

    let imported = session.import_from_file(&json_path).await.unwrap();
    assert_eq!(imported, 2);
    assert_eq!(session.notes().len(), 4);

    // Imported copies carry identical user-visible fields
    assert_eq!(session.notes()[2].title, "Groceries");
    assert_eq!(session.notes()[2].content, "Buy Milk");
}

#[tokio::test]
async fn test_bulk_workflow_with_visible_selection() {
    let (store, _temp) = create_test_store().await;
    let mut session = open_session(&store).await;

    session.create_note(draft("One", "1")).unwrap();
    session.create_note(draft("Two", "2")).unwrap();
    let hidden = session.create_note(draft("Hidden", "h")).unwrap();
    session.archive_note(&hidden.id).unwrap();

    // Select everything visible in the active view, then archive it
    let visible = visible_notes(session.notes(), "", &Category::All, false);
    let mut selection = Selection::new();
    selection.select_all(visible.iter().map(|n| n.id.clone()));
    assert_eq!(selection.len(), 2);

    session.archive_selected(&mut selection);

    assert!(selection.is_empty());
    let active = visible_notes(session.notes(), "", &Category::All, false);
    assert!(active.is_empty());
    let archived = visible_notes(session.notes(), "", &Category::All, true);
    assert_eq!(archived.len(), 3);
}

#[tokio::test]
async fn test_users_do_not_see_each_others_notes() {
    let (store, _temp) = create_test_store().await;

    let mut alice = open_session(&store).await;
    alice.create_note(draft("Private", "alice only")).unwrap();
    alice.save_now().await.unwrap();

    let bob = Session::sign_in("bob", Arc::clone(&store) as Arc<dyn DocumentStore>)
        .await
        .unwrap();

    assert!(bob.notes().is_empty());
}
