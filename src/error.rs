//! Error types for spotdump.

use thiserror::Error;

/// Everything that can end a run.
///
/// `Auth`, `PlaylistNotFound` and `Usage` are the failures the driver reports
/// on purpose. The remaining variants wrap transport, file and decoding
/// failures, which are not recovered from locally once the client has
/// spent its retries.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The credential exchange failed, was cancelled or returned no token.
    #[error("Couldn't get token for {user}: {reason}")]
    Auth { user: String, reason: String },

    /// No playlist owned by the user carries the requested name.
    #[error("Cannot find playlist: {0}")]
    PlaylistNotFound(String),

    /// Invalid combination of command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// A required configuration value is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP transport error or non-success status from the catalog.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// File I/O error (output files, token cache).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A response or record that does not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DumpError {
    pub fn auth(user: &str, reason: impl ToString) -> Self {
        DumpError::Auth {
            user: user.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias for `Result<T, DumpError>`.
pub type Result<T> = std::result::Result<T, DumpError>;
