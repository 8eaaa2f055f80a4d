#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
mod desktop;
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub use desktop::open_path;

/// No viewer launcher on this platform.
///
/// # Errors
/// Always returns [`crate::OpenError::NotSupported`].
#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
pub async fn open_path(_path: std::path::PathBuf) -> Result<(), crate::OpenError> {
    Err(crate::OpenError::NotSupported)
}
