//! Filesystem backed by the local disk.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use url::Url;

use crate::{Directory, Encoding, Filesystem, FsError, WriteFile};

/// Writes below the platform's well-known directories.
///
/// With [`LocalFilesystem::rooted`], every [`Directory`] maps to a subfolder of
/// one base path instead, which keeps tests and sandboxes off the user's real
/// documents folder.
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem {
    base: Option<PathBuf>,
}

impl LocalFilesystem {
    /// Use the platform directories.
    #[must_use]
    pub const fn new() -> Self {
        Self { base: None }
    }

    /// Map every root below `base`, e.g. `base/Documents`.
    pub fn rooted(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Absolute location of a root directory.
    ///
    /// # Errors
    /// Returns [`FsError::DirectoryUnavailable`] if the platform has no such directory.
    pub fn root(&self, directory: Directory) -> Result<PathBuf, FsError> {
        match &self.base {
            Some(base) => Ok(base.join(directory.name())),
            None => directory
                .platform_dir()
                .ok_or(FsError::DirectoryUnavailable(directory)),
        }
    }

    /// Resolve `path` below `directory`, refusing anything that escapes it.
    ///
    /// # Errors
    /// Returns [`FsError::InvalidPath`] for empty, absolute, or `..` paths.
    pub fn resolve(&self, path: &str, directory: Directory) -> Result<PathBuf, FsError> {
        let relative = sanitize(path)?;
        let root = self.root(directory)?;
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(root)
        };
        Ok(root.join(relative))
    }
}

fn sanitize(path: &str) -> Result<PathBuf, FsError> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(FsError::InvalidPath(path.to_owned()));
    }

    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(FsError::InvalidPath(path.to_owned()));
            }
        }
    }

    if clean.as_os_str().is_empty() {
        return Err(FsError::InvalidPath(path.to_owned()));
    }
    Ok(clean)
}

fn to_url(path: &Path) -> Result<Url, FsError> {
    Url::from_file_path(path).map_err(|()| FsError::InvalidPath(path.display().to_string()))
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn write_file(&self, request: WriteFile) -> Result<Url, FsError> {
        let target = self.resolve(&request.path, request.directory)?;

        let bytes = match request.encoding {
            Encoding::Base64 => STANDARD.decode(request.data.as_bytes())?,
            Encoding::Utf8 => request.data.into_bytes(),
        };

        if let Some(parent) = target.parent() {
            if request.recursive {
                std::fs::create_dir_all(parent)?;
            } else if !parent.is_dir() {
                return Err(FsError::ParentMissing(parent.to_path_buf()));
            }
        }

        std::fs::write(&target, &bytes)?;
        debug!("wrote {} bytes to {}", bytes.len(), target.display());

        to_url(&target)
    }

    async fn get_uri(&self, path: &str, directory: Directory) -> Result<Url, FsError> {
        let target = self.resolve(path, directory)?;
        to_url(&target)
    }

    async fn read_file(&self, path: &str, directory: Directory) -> Result<Vec<u8>, FsError> {
        let target = self.resolve(path, directory)?;
        Ok(std::fs::read(target)?)
    }
}
