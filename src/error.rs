//! Error types for the content layer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the content directory
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content directory is missing, not a directory, or unreadable
    #[error("content directory {path:?} is unavailable: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A content file exists but its front-matter cannot be parsed
    #[error("malformed front-matter in {path:?}: {message}")]
    MalformedContent { path: PathBuf, message: String },

    /// A single content file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ContentError::MalformedContent {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
