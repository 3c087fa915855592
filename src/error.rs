//! Error types for acmoj

use thiserror::Error;

/// Errors produced by the acmoj library
#[derive(Debug, Error)]
pub enum Error {
    /// No usable credentials are available
    #[error("not logged in to ACM Online Judge")]
    NotAuthenticated,

    /// Authentication failed or credentials could not be stored
    #[error("authentication error: {0}")]
    Auth(String),

    /// The judge rejected a request
    ///
    /// Displays the service-provided message verbatim.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable message from the service
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// A problem ID that is not a positive integer
    #[error("invalid problem ID: {0}")]
    InvalidProblemId(String),

    /// A submission ID that is not a positive integer
    #[error("invalid submission ID: {0}")]
    InvalidSubmissionId(String),

    /// No source file to act on
    #[error("no active source file")]
    NoActiveDocument,

    /// Terminal interaction failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for acmoj operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Message suitable for showing to the user as-is
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
