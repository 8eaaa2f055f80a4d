//! Cross-platform permission request handling.
//!
//! This crate provides a unified API for requesting the runtime permissions
//! filedrop needs. Desktop platforms grant them without a prompt; platforms
//! without a backend report [`PermissionError::NotSupported`].

#![warn(missing_docs)]

/// Platform-specific implementations.
pub mod sys;

use thiserror::Error;

/// Types of permissions that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Permission {
    /// Posting local notifications.
    Notifications,
}

/// The current status of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// Permission has been granted by the user.
    Granted,
    /// Permission has been denied by the user.
    Denied,
    /// Permission is restricted (e.g., parental controls on iOS).
    Restricted,
    /// Permission has not been requested yet.
    NotDetermined,
}

impl PermissionStatus {
    /// Whether the permission can be used right now.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Errors that can occur when requesting permissions.
#[derive(Debug, Clone, Error)]
pub enum PermissionError {
    /// The permission type is not supported on this platform.
    #[error("permission not supported on this platform")]
    NotSupported,
    /// An unknown error occurred.
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Check the current status of a permission without requesting it.
pub async fn check(permission: Permission) -> PermissionStatus {
    sys::check(permission).await
}

/// Request a permission from the user.
///
/// If the permission has already been granted or denied, this returns
/// the current status without showing a prompt.
///
/// # Errors
/// Returns a `PermissionError` if:
/// - The permission type is not supported on this platform.
/// - An underlying platform error occurs.
pub async fn request(permission: Permission) -> Result<PermissionStatus, PermissionError> {
    let status = sys::request(permission).await?;
    log::debug!("permission {permission:?} resolved to {status:?}");
    Ok(status)
}
