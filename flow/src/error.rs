use filedrop_fs::FsError;
use filedrop_notification::NotificationError;
use filedrop_opener::OpenError;
use thiserror::Error;

/// Errors returned by the download and open steps.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The payload could not be turned into base64 text.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// The storage provider rejected a write or lookup.
    #[error("storage error: {0}")]
    Storage(#[from] FsError),

    /// The notification provider rejected the schedule.
    #[error("notification error: {0}")]
    Notification(#[from] NotificationError),

    /// The viewer could not open the file.
    #[error("open error: {0}")]
    Open(#[from] OpenError),

    /// Another download is still running and single-flight mode is on.
    #[error("a download is already in progress")]
    InFlight,
}
