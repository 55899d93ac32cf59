//! Snapshot persistence errors.

/// Errors raised while saving or loading belief snapshots.
///
/// Load-side failures are non-fatal by design: callers fall back to an
/// empty store rather than propagating.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
