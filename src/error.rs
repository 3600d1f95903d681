//! Error types for reqscan library.

use std::io;
use thiserror::Error;

/// Result type alias for reqscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring text or extracting requirements.
///
/// A requirement that cannot be found is not an error: the attribute keeps
/// its default value and no evidence is recorded.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading source files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not decodable text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No text source can handle the given format.
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    /// A registered text source failed to produce text.
    #[error("Text source error: {0}")]
    Source(String),

    /// Extraction options are inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidInput(format!("text is not valid UTF-8: {}", err))
    }
}

#[cfg(feature = "pdf")]
impl From<unpdf::Error> for Error {
    fn from(err: unpdf::Error) -> Self {
        match err {
            unpdf::Error::Io(e) => Error::Io(e),
            unpdf::Error::UnknownFormat => Error::UnsupportedFormat("not a valid PDF".into()),
            _ => Error::Source(err.to_string()),
        }
    }
}
