//! Open files with the platform's default viewer.

#![warn(missing_docs)]

mod error;

/// Platform-specific implementations.
pub mod sys;

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

pub use error::OpenError;

/// Resource viewer capability.
#[async_trait]
pub trait FileOpener: Send + Sync {
    /// Open `uri`, hinting that its content is `mime_type`.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or no viewer could be launched.
    async fn open_file(&self, uri: &Url, mime_type: &str) -> Result<(), OpenError>;
}

/// Hands files to the desktop's default application.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Create an opener.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Local path behind a `file://` URL.
///
/// # Errors
/// Returns [`OpenError::NotAFile`] for any other scheme.
pub fn local_path(uri: &Url) -> Result<PathBuf, OpenError> {
    if uri.scheme() != "file" {
        return Err(OpenError::NotAFile(uri.to_string()));
    }
    uri.to_file_path()
        .map_err(|()| OpenError::NotAFile(uri.to_string()))
}

#[async_trait]
impl FileOpener for SystemOpener {
    async fn open_file(&self, uri: &Url, mime_type: &str) -> Result<(), OpenError> {
        let path = local_path(uri)?;
        if !path.exists() {
            return Err(OpenError::NotFound(path.display().to_string()));
        }
        log::info!("opening {} ({mime_type})", path.display());
        sys::open_path(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_file_urls_have_local_paths() {
        let err = local_path(&Url::parse("https://example.com/sample.txt").unwrap()).unwrap_err();
        assert!(matches!(err, OpenError::NotAFile(_)));
    }

    #[cfg(unix)]
    #[test]
    fn file_url_maps_to_path() {
        let url = Url::parse("file:///tmp/Download/sample.txt").unwrap();
        assert_eq!(
            local_path(&url).unwrap(),
            PathBuf::from("/tmp/Download/sample.txt")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_file_is_reported_before_launching() {
        let url = Url::parse("file:///definitely/not/here/sample.txt").unwrap();
        let err = SystemOpener::new()
            .open_file(&url, "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, OpenError::NotFound(_)));
    }
}
