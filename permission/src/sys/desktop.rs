//! Desktop permission implementation.
//!
//! Desktop notification daemons (freedesktop, Notification Center, the Windows
//! action center) accept posts from any process, and the documents directory
//! belongs to the user running the app. There is nothing to prompt for.

use crate::{Permission, PermissionError, PermissionStatus};

pub(crate) async fn check(_permission: Permission) -> PermissionStatus {
    PermissionStatus::Granted
}

pub(crate) async fn request(_permission: Permission) -> Result<PermissionStatus, PermissionError> {
    Ok(PermissionStatus::Granted)
}
