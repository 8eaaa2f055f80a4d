use crate::{LocalNotification, NotificationError};

/// No notification backend on this platform.
pub const SUPPORTED: bool = false;

/// Always fails with [`NotificationError::NotSupported`].
///
/// # Errors
/// Always.
pub fn present<F>(_notification: &LocalNotification, _on_activate: F) -> Result<(), NotificationError>
where
    F: FnOnce() + Send + 'static,
{
    Err(NotificationError::NotSupported)
}
