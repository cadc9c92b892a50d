//! Error types for docreport library.

use std::io;
use thiserror::Error;

/// Result type alias for docreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing documents and building reports.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document bytes could not be decoded as text.
    #[error("Decoding error: {0}")]
    Decode(String),

    /// The analysis result is not valid JSON or has an unexpected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport error talking to the analysis service.
    #[cfg(feature = "azure")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The analysis service rejected the request or the analysis failed.
    #[error("Analysis engine error ({status}): {message}")]
    Engine {
        /// HTTP status code, or 0 when the failure was reported in the body
        status: u16,
        /// Message returned by the service
        message: String,
    },

    /// A required response header was not present.
    #[error("Missing response header: {0}")]
    MissingHeader(String),

    /// Error during rendering (report, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Check if this is a decoding error that the pipeline can recover from.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Decode(err.to_string())
    }
}
