//! Error types for the dedupe crate

use thiserror::Error;

/// A remote record that cannot take part in duplicate detection.
///
/// These are recoverable: callers log the record and move on instead of
/// aborting the run.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Record carries no parents field
    #[error("file {id} ({name:?}) has no parents")]
    MissingParents { id: String, name: String },

    /// Record carries no modification time
    #[error("file {id} ({name:?}) has no modification time")]
    MissingModifiedTime { id: String, name: String },

    /// Modification time is not a valid RFC 3339 timestamp
    #[error("file {id} ({name:?}) has unparseable modification time {value:?}: {source}")]
    BadTimestamp {
        id: String,
        name: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type for record conversion
pub type Result<T> = std::result::Result<T, RecordError>;
