use std::path::PathBuf;

use thiserror::Error;

use crate::Directory;

/// Errors that can occur when accessing the file system.
#[derive(Error, Debug)]
pub enum FsError {
    /// The platform has no location for the requested directory.
    #[error("{0:?} directory is not available on this platform")]
    DirectoryUnavailable(Directory),

    /// The path escapes its root or is otherwise malformed.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A non-recursive write targeted a directory that does not exist.
    #[error("parent directory must exist: {}", .0.display())]
    ParentMissing(PathBuf),

    /// The data could not be decoded with the requested encoding.
    #[error("failed to decode file data: {0}")]
    Decode(#[from] base64::DecodeError),

    /// An IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
