use notify_rust::Notification as NrNotification;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::Timeout;

use crate::{LocalNotification, NotificationError};

/// Desktop notification daemons are available.
pub const SUPPORTED: bool = true;

/// How long a freedesktop notification stays clickable.
///
/// The daemon closes it afterwards, which releases the waiting thread.
/// Daemons that ignore expiry timeouts keep the thread until the user
/// dismisses the notification.
#[cfg(all(unix, not(target_os = "macos")))]
pub const ACTIVATION_WINDOW_MS: u32 = 5 * 60 * 1000;

/// Show `notification` now.
///
/// On freedesktop systems this blocks until the notification is closed or
/// [`ACTIVATION_WINDOW_MS`] elapses, and calls `on_activate` if the user
/// clicked it. Other desktops cannot report clicks back to the posting
/// process, so `on_activate` is never called there.
///
/// # Errors
/// Returns an error if the notification daemon rejects the notification.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn present<F>(notification: &LocalNotification, on_activate: F) -> Result<(), NotificationError>
where
    F: FnOnce() + Send + 'static,
{
    let handle = NrNotification::new()
        .summary(&notification.title)
        .body(&notification.body)
        .id(notification.id.unsigned_abs())
        .action("default", "Open")
        .timeout(Timeout::Milliseconds(ACTIVATION_WINDOW_MS))
        .show()
        .map_err(|e| NotificationError::Platform(e.to_string()))?;

    handle.wait_for_action(|action| {
        if action == "default" {
            on_activate();
        }
    });
    Ok(())
}

/// Show `notification` now.
///
/// # Errors
/// Returns an error if the platform rejects the notification.
#[cfg(not(all(unix, not(target_os = "macos"))))]
pub fn present<F>(notification: &LocalNotification, _on_activate: F) -> Result<(), NotificationError>
where
    F: FnOnce() + Send + 'static,
{
    NrNotification::new()
        .summary(&notification.title)
        .body(&notification.body)
        .show()
        .map(|_| ())
        .map_err(|e| NotificationError::Platform(e.to_string()))
}
