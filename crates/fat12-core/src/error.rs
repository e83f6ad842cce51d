//! Error types shared across the FAT12 reporting stack

use std::path::PathBuf;
use thiserror::Error;

/// The error type returned by every fallible operation in this workspace
#[derive(Error, Debug)]
pub enum Error {
    /// No image path was given on the command line
    #[error("usage error: missing image path")]
    UsageError,

    /// The image file could not be opened
    #[error("failed to open image {path}: {cause}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// A required field extends past the end of the image
    #[error("short read at offset {offset}: wanted {want} bytes, got {got}")]
    ShortRead { offset: u64, want: usize, got: usize },

    /// The directory tree recursed deeper than the implementation allows
    #[error("directory tree exceeds maximum depth")]
    DirectoryTooDeep,

    /// Reserved for a future strict-mode validator; not raised by the base decoder
    #[error("malformed directory entry: {0}")]
    MalformedEntry(String),

    /// Any other I/O failure not already classified above
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the FAT12 crates
pub type Result<T> = std::result::Result<T, Error>;
