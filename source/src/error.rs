//! Source error types.

/// Errors that can occur while querying the account service.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to decode {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("{0}")]
    Other(String),
}
