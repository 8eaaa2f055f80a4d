use std::time::Duration;

use filedrop_fs::Directory;
use serde::{Deserialize, Serialize};

/// Name of the sample file.
pub const FILE_NAME: &str = "sample.txt";
/// MIME type of the sample file.
pub const FILE_MIME_TYPE: &str = "text/plain";
/// Contents written on every download.
pub const SAMPLE_CONTENTS: &str = "This is a sample text file.";
/// Subdirectory used on every platform except iOS.
pub const DOWNLOAD_DIR: &str = "Download";
/// Id shared by the scheduled notification and the activation filter.
pub const NOTIFICATION_ID: i32 = 1;
/// Notification title.
pub const NOTIFICATION_TITLE: &str = "Download Complete";
/// Notification body.
pub const NOTIFICATION_BODY: &str = "Tap to open the file";
/// Delay between the download finishing and the notification firing.
pub const NOTIFICATION_DELAY_MS: u64 = 1000;

/// Which listeners are removed when a mounted view is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListenerScope {
    /// Only the listener the view registered.
    #[default]
    Own,
    /// Every listener on the notification provider.
    All,
}

/// Settings for [`DownloadFlow`](crate::DownloadFlow).
///
/// Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowConfig {
    /// Logical name of the written file.
    pub file_name: String,
    /// MIME type used when opening it.
    pub mime_type: String,
    /// Text written on every download.
    pub contents: String,
    /// Subdirectory for every platform except iOS.
    pub download_dir: String,
    /// Storage root.
    pub directory: Directory,
    /// Id of the scheduled notification; only this id opens the file.
    pub notification_id: i32,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// Delay before the notification fires, in milliseconds.
    pub delay_ms: u64,
    /// Reject a download while another one is still running.
    pub single_flight: bool,
    /// Listeners removed when a mounted view goes away.
    pub teardown: ListenerScope,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            file_name: FILE_NAME.to_owned(),
            mime_type: FILE_MIME_TYPE.to_owned(),
            contents: SAMPLE_CONTENTS.to_owned(),
            download_dir: DOWNLOAD_DIR.to_owned(),
            directory: Directory::Documents,
            notification_id: NOTIFICATION_ID,
            title: NOTIFICATION_TITLE.to_owned(),
            body: NOTIFICATION_BODY.to_owned(),
            delay_ms: NOTIFICATION_DELAY_MS,
            single_flight: false,
            teardown: ListenerScope::Own,
        }
    }
}

impl FlowConfig {
    /// Delay before the notification fires.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
