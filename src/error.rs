//! Ledger store error types.

use std::path::PathBuf;

/// Errors raised while reading or writing the ledger document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read ledger {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse ledger {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write ledger {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("refusing to save ledger {path}: {field} is not a finite number")]
    NonFinite { path: PathBuf, field: String },

    #[error("failed to serialize ledger: {0}")]
    Serialize(#[from] serde_json::Error),
}
