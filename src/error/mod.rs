//! Error types for prodcat.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! The fetch core never surfaces these errors: per its contract every fetch
//! failure collapses to an empty outcome, logged but not propagated. The
//! variants here serve the surrounding glue (configuration, serialization,
//! output persistence).

use thiserror::Error;

/// Exit codes for the prodcat binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Parse/format/configuration errors
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Main error type for prodcat operations.
#[derive(Error, Debug)]
pub enum ProdcatError {
    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error parsing the configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Generic network error.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse a response body.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProdcatError {
    /// Map error to exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::ConfigParse { .. } | Self::ParseResponse(_) => {
                ExitCode::ParseError
            }
            Self::Timeout(_) => ExitCode::Timeout,
            Self::Network(_) | Self::Io(_) | Self::Json(_) | Self::Other(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Result type alias for prodcat operations.
pub type Result<T> = std::result::Result<T, ProdcatError>;
