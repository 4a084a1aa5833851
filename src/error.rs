use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

#[derive(Error, Debug)]
/// Table error
pub enum TableError {
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not determine headers: no headers were given and the source has no header line")]
    SchemaUnknown,

    #[error("Invalid index: {index} (length {len})")]
    InvalidIndex { index: isize, len: usize },

    #[error("Invalid header: {0}")]
    UnknownHeader(String),

    #[error("Expected {expected} items, but got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Unknown row type: {0}. Expected a sequence or a mapping")]
    UnsupportedRowType(String),

    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    #[error("File {} exists, and overwrite is disabled", .0.display())]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
