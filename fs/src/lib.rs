//! Cross-platform file system utilities.
//!
//! This crate provides a unified API for accessing common platform directories
//! such as documents and cache folders, plus a [`Filesystem`] capability that
//! writes files below those roots and resolves them to `file://` URLs.

mod error;
mod local;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

pub use error::FsError;
pub use local::LocalFilesystem;

/// Well-known roots that relative paths are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Directory {
    /// User-visible documents.
    #[default]
    Documents,
    /// Disposable cache files.
    Cache,
    /// Private application data.
    Data,
}

impl Directory {
    /// Stable folder name, used when every root lives under one base directory.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Cache => "Cache",
            Self::Data => "Data",
        }
    }

    /// Platform location for this root, if the platform has one.
    #[must_use]
    pub fn platform_dir(self) -> Option<PathBuf> {
        match self {
            Self::Documents => StandardDirs::documents_dir(),
            Self::Cache => StandardDirs::cache_dir(),
            Self::Data => StandardDirs::data_dir(),
        }
    }
}

/// How the `data` of a write is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Base64 text, decoded to bytes before writing.
    #[default]
    Base64,
    /// Plain UTF-8 text, written as-is.
    Utf8,
}

/// A request to write one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFile {
    /// Path relative to `directory`.
    pub path: String,
    /// File contents, encoded according to `encoding`.
    pub data: String,
    /// Root the path is resolved against.
    pub directory: Directory,
    /// Create missing parent directories.
    pub recursive: bool,
    /// Encoding of `data`.
    pub encoding: Encoding,
}

impl WriteFile {
    /// A base64 write with default options (documents root, non-recursive).
    pub fn new(path: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
            directory: Directory::Documents,
            recursive: false,
            encoding: Encoding::Base64,
        }
    }

    /// Set the root directory.
    #[must_use]
    pub const fn directory(mut self, directory: Directory) -> Self {
        self.directory = directory;
        self
    }

    /// Create intermediate directories as needed.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the data encoding.
    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Persistent storage capability.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Write a file and return its absolute URL.
    ///
    /// # Errors
    /// Returns an error if the path is invalid, the data cannot be decoded,
    /// or the underlying write fails.
    async fn write_file(&self, request: WriteFile) -> Result<Url, FsError>;

    /// Resolve a relative path to an absolute URL without touching the file.
    ///
    /// # Errors
    /// Returns an error if the root is unavailable or the path is invalid.
    async fn get_uri(&self, path: &str, directory: Directory) -> Result<Url, FsError>;

    /// Read a whole file.
    ///
    /// # Errors
    /// Returns an error if the path is invalid or the file cannot be read.
    async fn read_file(&self, path: &str, directory: Directory) -> Result<Vec<u8>, FsError>;
}

/// Cross-platform File System Utilities
///
/// This struct provides access to file system operations like finding sandbox paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDirs;

impl StandardDirs {
    /// Gets the application's documents directory.
    #[must_use]
    pub fn documents_dir() -> Option<PathBuf> {
        #[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
        {
            dirs::document_dir()
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            None
        }
    }

    /// Gets the application's cache directory.
    #[must_use]
    pub fn cache_dir() -> Option<PathBuf> {
        #[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
        {
            dirs::cache_dir()
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            None
        }
    }

    /// Gets the application's private data directory.
    #[must_use]
    pub fn data_dir() -> Option<PathBuf> {
        #[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
        {
            dirs::data_local_dir()
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            None
        }
    }
}
