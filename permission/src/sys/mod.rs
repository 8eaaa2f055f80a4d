//! Platform-specific permission implementations.

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
mod desktop;

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub(crate) use desktop::{check, request};

// Fallback for platforms without a backend (compile-time stub)
#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
pub(crate) async fn check(_permission: crate::Permission) -> crate::PermissionStatus {
    crate::PermissionStatus::NotDetermined
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
pub(crate) async fn request(
    _permission: crate::Permission,
) -> Result<crate::PermissionStatus, crate::PermissionError> {
    Err(crate::PermissionError::NotSupported)
}
