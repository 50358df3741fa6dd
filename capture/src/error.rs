//! Error types for the capture tool.

use std::path::PathBuf;

/// Errors raised while setting the tool up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("account source error: {0}")]
    Source(#[from] pnl_ledger_source::SourceError),
}

pub type Result<T> = std::result::Result<T, Error>;
