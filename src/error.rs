//! Error types for ygconcat.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The result type used throughout ygconcat.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for merge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A source file could not be opened.
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        /// Path of the source file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An I/O error occurred while reading a source or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A source does not follow the header/body/blank-line block layout.
    #[error("Malformed input in source {source_index} at block {block}: {reason}")]
    Malformed {
        /// Index of the offending source.
        source_index: usize,
        /// Zero-based number of the block being merged.
        block: u64,
        /// What was wrong.
        reason: String,
    },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Creates a new malformed input error.
    pub fn malformed(source_index: usize, block: u64, reason: impl Into<String>) -> Self {
        Error::Malformed { source_index, block, reason: reason.into() }
    }

    /// Creates a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}
