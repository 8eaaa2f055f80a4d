//! Download, notify, open.
//!
//! [`DownloadFlow`] writes a small text file below the documents directory,
//! schedules a local notification about it, and opens the file with the
//! platform viewer once that notification is tapped. Every side effect goes
//! through a capability trait, bundled in [`Capabilities`]:
//!
//! - [`NotificationCenter`]: permission, scheduling, activation listeners.
//! - [`Filesystem`]: writing the file and resolving it to a URL.
//! - [`FileOpener`]: launching the viewer.
//! - [`PlatformIdentity`]: choosing the storage path.
//!
//! Operations return a [`FlowError`] on failure. The UI-facing entry points
//! ([`DownloadFlow::on_download_pressed`] and [`MountedView::run`]) log it and
//! carry on.

#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod view;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info};
use url::Url;

pub use config::{
    DOWNLOAD_DIR, FILE_MIME_TYPE, FILE_NAME, FlowConfig, ListenerScope, NOTIFICATION_BODY,
    NOTIFICATION_DELAY_MS, NOTIFICATION_ID, NOTIFICATION_TITLE, SAMPLE_CONTENTS,
};
pub use error::FlowError;
pub use file::{
    DataUrlEncoder, FileTarget, PayloadEncoder, PendingFile, SavedFile, data_url, encode_payload,
    platform_path,
};
pub use view::{ACTIVATION_QUEUE, MountedView};

pub use filedrop_fs::{Directory, Filesystem, WriteFile};
pub use filedrop_notification::{ActivationEvent, LocalNotification, NotificationCenter, Schedule};
pub use filedrop_opener::FileOpener;
pub use filedrop_system::{Platform, PlatformIdentity};

/// The external providers the flow calls into.
#[derive(Clone)]
pub struct Capabilities {
    /// Permission, scheduling and activation listeners.
    pub notifications: Arc<dyn NotificationCenter>,
    /// Where the sample file is written.
    pub storage: Arc<dyn Filesystem>,
    /// Viewer launched on activation.
    pub opener: Arc<dyn FileOpener>,
    /// Picks the storage path.
    pub platform: Arc<dyn PlatformIdentity>,
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("platform", &self.platform.platform())
            .finish_non_exhaustive()
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sequences the write → notify and notify → open steps.
pub struct DownloadFlow {
    capabilities: Capabilities,
    config: FlowConfig,
    encoder: Arc<dyn PayloadEncoder>,
    in_flight: AtomicBool,
}

impl fmt::Debug for DownloadFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadFlow")
            .field("capabilities", &self.capabilities)
            .field("config", &self.config)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl DownloadFlow {
    /// Create a flow over the given providers.
    #[must_use]
    pub fn new(capabilities: Capabilities, config: FlowConfig) -> Self {
        Self {
            capabilities,
            config,
            encoder: Arc::new(DataUrlEncoder),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Replace the payload encoder, [`DataUrlEncoder`] by default.
    #[must_use]
    pub fn with_encoder(mut self, encoder: Arc<dyn PayloadEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Providers in use.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Whether a download is currently running.
    #[must_use]
    pub fn is_downloading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Where the sample file lives on the current platform.
    ///
    /// Re-derived from the platform provider on every call.
    #[must_use]
    pub fn current_target(&self) -> FileTarget {
        let platform = self.capabilities.platform.platform();
        FileTarget {
            path: platform_path(&platform, &self.config.file_name, &self.config.download_dir),
            directory: self.config.directory,
            mime_type: self.config.mime_type.clone(),
        }
    }

    /// Write the sample file and schedule the notification that opens it.
    ///
    /// The notification is only scheduled after the write succeeded. Calling
    /// this again reschedules under the same id, replacing the pending one.
    ///
    /// # Errors
    /// - [`FlowError::InFlight`] if single-flight mode is on and a download is running.
    /// - [`FlowError::Encoding`] if the payload could not be encoded.
    /// - [`FlowError::Storage`] / [`FlowError::Notification`] if a provider rejects a call.
    pub async fn download_file(&self) -> Result<SavedFile, FlowError> {
        let _guard = if self.config.single_flight {
            Some(InFlight::acquire(&self.in_flight).ok_or(FlowError::InFlight)?)
        } else {
            None
        };

        let file = PendingFile::from_config(&self.config);
        let data = self.encoder.encode(&file).await?;
        let target = self.current_target();

        let uri = self
            .capabilities
            .storage
            .write_file(
                WriteFile::new(&target.path, data)
                    .directory(target.directory)
                    .recursive(true),
            )
            .await?;
        info!("saved {} to {uri}", file.logical_name);

        let notification = LocalNotification::new(self.config.notification_id)
            .title(&self.config.title)
            .body(&self.config.body)
            .schedule(Schedule::after(self.config.delay()))
            .extra(target.to_extra());
        self.capabilities
            .notifications
            .schedule(vec![notification])
            .await?;
        debug!(
            "notification {} scheduled in {:?}",
            self.config.notification_id,
            self.config.delay()
        );

        Ok(SavedFile {
            target,
            uri,
            notification_id: self.config.notification_id,
        })
    }

    /// Button handler: run [`download_file`](Self::download_file), log any failure.
    pub async fn on_download_pressed(&self) -> Option<SavedFile> {
        match self.download_file().await {
            Ok(saved) => Some(saved),
            Err(err) => {
                error!("Download failed: {err}");
                None
            }
        }
    }

    /// Open the sample file at its current platform path.
    ///
    /// # Errors
    /// Returns an error if the path cannot be resolved or the viewer fails.
    pub async fn open_file(&self) -> Result<Url, FlowError> {
        let target = self.current_target();
        self.open_target(&target).await
    }

    /// Resolve `target` to an absolute URL and open it.
    ///
    /// # Errors
    /// Returns an error if the path cannot be resolved or the viewer fails.
    pub async fn open_target(&self, target: &FileTarget) -> Result<Url, FlowError> {
        let uri = self
            .capabilities
            .storage
            .get_uri(&target.path, target.directory)
            .await?;
        self.capabilities
            .opener
            .open_file(&uri, &target.mime_type)
            .await?;
        Ok(uri)
    }

    /// React to a notification activation.
    ///
    /// Returns `None` for notifications this flow did not schedule. The file
    /// reference stored in the notification is preferred; the current platform
    /// path is the fallback.
    pub async fn handle_activation(
        &self,
        event: &ActivationEvent,
    ) -> Option<Result<Url, FlowError>> {
        if event.id() != self.config.notification_id {
            return None;
        }

        let target = event
            .notification
            .extra
            .as_ref()
            .and_then(FileTarget::from_extra)
            .unwrap_or_else(|| self.current_target());
        Some(self.open_target(&target).await)
    }

    /// Attach to the enclosing view: request permission and start listening.
    ///
    /// The permission result is only logged. Dropping the returned view
    /// removes the listener again.
    pub async fn mount(&self) -> MountedView<'_> {
        match self.capabilities.notifications.request_permissions().await {
            Ok(status) => debug!("notification permission: {status:?}"),
            Err(err) => error!("notification permission request failed: {err}"),
        }
        MountedView::attach(self)
    }
}
