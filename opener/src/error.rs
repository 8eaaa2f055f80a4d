use thiserror::Error;

/// Errors that can occur when opening a file.
#[derive(Error, Debug)]
pub enum OpenError {
    /// The URL does not point at a local file.
    #[error("not a local file: {0}")]
    NotAFile(String),

    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The launcher ran but reported failure.
    #[error("launcher `{launcher}` exited with {status}")]
    LauncherFailed {
        /// Program that was run.
        launcher: String,
        /// Its exit status.
        status: std::process::ExitStatus,
    },

    /// The launcher could not be started.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred in the underlying platform implementation.
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// Opening files is not supported on this platform.
    #[error("opening files is not supported on this platform")]
    NotSupported,
}
