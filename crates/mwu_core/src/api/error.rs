//! Error types for server calls.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Transport-level failure of a server call.
///
/// Server-reported errors are not `ApiError`s: they arrive as well-formed
/// JSON and become failure outcomes directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The file to upload could not be read.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Connection, TLS, timeout or client construction failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("Malformed response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that is neither a success nor an error report.
    #[error("Unrecognised response (HTTP {status}): neither a result nor an error")]
    Unrecognised { status: u16 },
}

impl ApiError {
    /// Text for the detail block: this error followed by its causes.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        // The first source is already part of our own message.
        let mut source = std::error::Error::source(self).and_then(|s| s.source());
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}

/// Result type for server calls.
pub type ApiResult<T> = Result<T, ApiError>;
