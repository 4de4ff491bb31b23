//! Application configuration constants
//!
//! Central location for configuration constants, resource limits,
//! and validation boundaries used throughout the engine.

use std::time::Duration;

// ===== Sync Settings =====

/// Default debounce delay before a flush is written to the document store.
/// Mutations arriving inside this window supersede the pending write.
pub const SYNC_DEBOUNCE: Duration = Duration::from_millis(1_000);

/// Minimum debounce delay in milliseconds.
/// Values below this cause excessive remote writes under fast typing.
pub const MIN_SYNC_DEBOUNCE_MS: u64 = 100;

/// Maximum debounce delay in milliseconds (5 minutes).
/// Values above this risk losing too much work when a session ends.
pub const MAX_SYNC_DEBOUNCE_MS: u64 = 300_000;

// ===== Export Settings =====

/// Prefix for exported download files, e.g. "quillcove-notes-2026-08-26.json"
pub const EXPORT_FILE_PREFIX: &str = "quillcove-notes";

// ===== Storage Settings =====

/// Default SQLite database filename inside the data directory
pub const DEFAULT_DB_FILENAME: &str = "quillcove.sqlite";

/// Clamp a requested debounce delay to the supported range.
pub fn clamp_sync_debounce(requested_ms: u64) -> Duration {
    Duration::from_millis(requested_ms.clamp(MIN_SYNC_DEBOUNCE_MS, MAX_SYNC_DEBOUNCE_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_sync_debounce() {
        assert_eq!(clamp_sync_debounce(10).as_millis(), 100);
        assert_eq!(clamp_sync_debounce(1_000).as_millis(), 1_000);
        assert_eq!(clamp_sync_debounce(999_999).as_millis(), 300_000);
    }
}
