use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use filedrop_fs::Directory;
use filedrop_system::Platform;
use futures::channel::oneshot;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{FlowConfig, FlowError};

const EXTRA_KEY: &str = "file";

/// The file about to be written. Built fresh for every download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// File name before the platform path is applied.
    pub logical_name: String,
    /// MIME type handed to the viewer.
    pub mime_type: String,
    /// Raw bytes to store.
    pub payload: Vec<u8>,
}

impl PendingFile {
    /// The sample file described by `config`.
    #[must_use]
    pub fn from_config(config: &FlowConfig) -> Self {
        Self {
            logical_name: config.file_name.clone(),
            mime_type: config.mime_type.clone(),
            payload: config.contents.as_bytes().to_vec(),
        }
    }
}

/// Storage path for `logical_name` on `platform`.
///
/// iOS keeps the bare name; every other platform nests it under `download_dir`.
#[must_use]
pub fn platform_path(platform: &Platform, logical_name: &str, download_dir: &str) -> String {
    let dir = download_dir.trim_end_matches('/');
    if *platform == Platform::Ios || dir.is_empty() {
        logical_name.to_owned()
    } else {
        format!("{dir}/{logical_name}")
    }
}

/// `data:` URL of `payload`, the form browsers hand back from a file reader.
#[must_use]
pub fn data_url(mime_type: &str, payload: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(payload))
}

fn base64_part(url: &str) -> Result<String, FlowError> {
    url.split_once(',')
        .map(|(_, data)| data.to_owned())
        .ok_or_else(|| FlowError::Encoding("data URL has no payload".into()))
}

/// Base64 text of the file's payload.
///
/// The conversion runs off the calling task; the caller suspends until it
/// produces a result or the encoder goes away without one.
///
/// # Errors
/// Returns [`FlowError::Encoding`] if no result is produced.
pub async fn encode_payload(file: &PendingFile) -> Result<String, FlowError> {
    let (tx, rx) = oneshot::channel();
    let mime_type = file.mime_type.clone();
    let payload = file.payload.clone();

    std::thread::Builder::new()
        .name("filedrop-encode".into())
        .spawn(move || {
            let _ = tx.send(data_url(&mime_type, &payload));
        })
        .map_err(|e| FlowError::Encoding(format!("Failed to start encoder: {e}")))?;

    let url = rx
        .await
        .map_err(|_| FlowError::Encoding("Failed to convert payload to base64".into()))?;
    base64_part(&url)
}

/// Turns a [`PendingFile`] into the base64 text handed to storage.
#[async_trait]
pub trait PayloadEncoder: Send + Sync {
    /// Base64 text of `file`'s payload.
    ///
    /// # Errors
    /// Returns [`FlowError::Encoding`] if the payload cannot be converted.
    async fn encode(&self, file: &PendingFile) -> Result<String, FlowError>;
}

/// Encodes through a `data:` URL, see [`encode_payload`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlEncoder;

#[async_trait]
impl PayloadEncoder for DataUrlEncoder {
    async fn encode(&self, file: &PendingFile) -> Result<String, FlowError> {
        encode_payload(file).await
    }
}

/// Where a saved file lives, as carried inside the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTarget {
    /// Path relative to `directory`.
    pub path: String,
    /// Storage root `path` is relative to.
    pub directory: Directory,
    /// MIME type passed to the viewer.
    pub mime_type: String,
}

impl FileTarget {
    /// Notification `extra` payload holding this target.
    #[must_use]
    pub fn to_extra(&self) -> serde_json::Value {
        serde_json::json!({ EXTRA_KEY: self })
    }

    /// Target stored by [`to_extra`](Self::to_extra), if present and well-formed.
    #[must_use]
    pub fn from_extra(extra: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(extra.get(EXTRA_KEY)?.clone()).ok()
    }
}

/// Result of a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Where the file was written.
    pub target: FileTarget,
    /// Absolute location reported by the storage provider.
    pub uri: Url,
    /// Id of the notification scheduled for it.
    pub notification_id: i32,
}
