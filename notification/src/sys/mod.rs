#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub mod desktop;
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub use desktop::{SUPPORTED, present};

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
pub mod fallback;
#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
pub use fallback::{SUPPORTED, present};
