//! SQLite document store
//!
//! One row per user in `user_documents`. Saves are upserts that touch
//! only the notes/labels/updated_at columns, so other columns added to
//! the row later survive a flush — the relational equivalent of a
//! merge-write against a document database.
//!
//! Uses WAL mode for better concurrency and crash safety.

use super::document_store::DocumentStore;
use crate::error::Result;
use crate::store::{Note, UserDocument};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Build connection options shared by schema-init and application
/// connections.
fn connect_options(db_path: &Path) -> std::result::Result<SqliteConnectOptions, sqlx::Error> {
    SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display())).map(
        |opts| {
            opts.create_if_missing(true)
                .busy_timeout(Duration::from_secs(5))
                .journal_mode(SqliteJournalMode::Wal)
                .foreign_keys(true)
        },
    )
}

/// Create and initialize a database connection pool.
///
/// Schema init runs on a dedicated single-connection pool that is closed
/// before the application pool is created, so every application
/// connection sees the final schema.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    tracing::info!("Creating database connection pool at: {:?}", db_path);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let init_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(db_path)?)
        .await?;

    initialize_schema(&init_pool).await?;
    init_pool.close().await;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options(db_path)?)
        .await?;

    tracing::info!("Database pool created successfully");

    Ok(pool)
}

/// Initialize the schema on a fresh or existing database
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing database schema");

    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_documents (
            user_id TEXT PRIMARY KEY,
            notes TEXT NOT NULL DEFAULT '[]',
            labels TEXT NOT NULL DEFAULT '[]',
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database initialization complete");
    Ok(())
}

/// Document store backed by SQLite
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (and initialize) a store at the given database path
    pub async fn open(db_path: &Path) -> Result<Self> {
        let pool = create_pool(db_path).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn load(&self, user_id: &str) -> Result<Option<UserDocument>> {
        let row = sqlx::query(
            r#"
            SELECT notes, labels FROM user_documents WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            tracing::debug!("No document for user: {}", user_id);
            return Ok(None);
        };

        let notes_json: String = row.get("notes");
        let labels_json: String = row.get("labels");
        let notes: Vec<Note> = serde_json::from_str(&notes_json)?;
        let labels: Vec<String> = serde_json::from_str(&labels_json)?;

        tracing::debug!(
            "Loaded document for user {}: {} notes, {} labels",
            user_id,
            notes.len(),
            labels.len()
        );

        Ok(Some(UserDocument { notes, labels }))
    }

    async fn save(&self, user_id: &str, doc: &UserDocument) -> Result<()> {
        let notes_json = serde_json::to_string(&doc.notes)?;
        let labels_json = serde_json::to_string(&doc.labels)?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_documents (user_id, notes, labels, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                notes = excluded.notes,
                labels = excluded.labels,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(&notes_json)
        .bind(&labels_json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            "Saved document for user {}: {} notes, {} labels",
            user_id,
            doc.notes.len(),
            doc.labels.len()
        );

        Ok(())
    }
}
