//! # Filedrop
//!
//! A small capability kit plus the one workflow built on top of it: write a sample file
//! to the documents directory, schedule a local notification, and open the file when
//! the notification is tapped.
//!
//! ## Features
//!
//! Each platform capability lives in its own crate and can be enabled on its own.
//!
//! - `permission`: Unified permission request handling.
//! - `notification`: Local notifications with activation listeners.
//! - `fs`: Documents/cache directories and a sandboxed file writer.
//! - `opener`: Open a file with the platform's default viewer.
//! - `system`: Platform identity.
//! - `flow`: The download → notify → open workflow (default).
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! filedrop = { version = "0.1", features = ["full"] }
//! ```
//!
//! ```rust
//! use filedrop::flow::platform_path;
//! use filedrop::system::Platform;
//!
//! assert_eq!(platform_path(&Platform::Ios, "sample.txt", "Download"), "sample.txt");
//! assert_eq!(
//!     platform_path(&Platform::Android, "sample.txt", "Download"),
//!     "Download/sample.txt"
//! );
//! ```

#[cfg(feature = "flow")]
pub use filedrop_flow as flow;

#[cfg(feature = "fs")]
pub use filedrop_fs as fs;

#[cfg(feature = "notification")]
pub use filedrop_notification as notification;

#[cfg(feature = "opener")]
pub use filedrop_opener as opener;

#[cfg(feature = "permission")]
pub use filedrop_permission as permission;

#[cfg(feature = "system")]
pub use filedrop_system as system;
