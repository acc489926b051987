//! Error types for smolscan

use thiserror::Error;

/// Result type alias using the smolscan Error
pub type Result<T> = std::result::Result<T, Error>;

/// smolscan error types
#[derive(Error, Debug)]
pub enum Error {
    // === Target / configuration errors (fatal, pre-scan) ===
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // === Probe errors (recovered locally, converted to findings) ===
    #[error("Connection failed to {target}: {reason}")]
    ConnectionFailed { target: String, reason: String },

    #[error("Probe '{probe}' timed out")]
    ProbeTimeout { probe: String },

    #[error("Probe '{probe}' failed: {message}")]
    ProbeFailed { probe: String, message: String },

    // === IO / serialization ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Bugs in the scanner itself (never swallowed) ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True if this error must terminate the run rather than become a finding
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidTarget(_) | Error::Configuration(_) | Error::Internal(_)
        )
    }
}
