//! Logging setup
//!
//! Embedding applications call [`init`] once at startup. Honors
//! `RUST_LOG`, defaulting to debug for this crate and info elsewhere.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quillcove=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
