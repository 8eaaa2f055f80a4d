//! In-memory providers for driving the flow in tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use filedrop_flow::{
    ActivationEvent, Capabilities, DataUrlEncoder, Directory, DownloadFlow, FileOpener,
    Filesystem, FlowConfig, FlowError, LocalNotification, NotificationCenter, PayloadEncoder,
    PendingFile, Platform, PlatformIdentity, WriteFile,
};
use filedrop_fs::{FsError, LocalFilesystem};
use filedrop_notification::{
    ActivationListener, ListenerId, ListenerRegistry, NotificationError, PermissionStatus,
    Scheduler,
};
use filedrop_opener::OpenError;
use tempfile::TempDir;
use url::Url;

#[derive(Debug, Default)]
pub struct MockNotifications {
    pub registry: ListenerRegistry,
    pub scheduler: Scheduler,
    pub scheduled: Mutex<Vec<LocalNotification>>,
    pub permission_requests: AtomicUsize,
    pub fail_permission: AtomicBool,
    pub fail_schedule: AtomicBool,
}

impl MockNotifications {
    pub fn emit(&self, event: &ActivationEvent) -> usize {
        self.registry.emit(event)
    }

    pub fn scheduled(&self) -> Vec<LocalNotification> {
        self.scheduled.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationCenter for MockNotifications {
    async fn request_permissions(&self) -> Result<PermissionStatus, NotificationError> {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_permission.load(Ordering::SeqCst) {
            return Err(NotificationError::Platform("permission prompt failed".into()));
        }
        Ok(PermissionStatus::Granted)
    }

    async fn schedule(
        &self,
        notifications: Vec<LocalNotification>,
    ) -> Result<(), NotificationError> {
        if self.fail_schedule.load(Ordering::SeqCst) {
            return Err(NotificationError::Platform("simulated rejection".into()));
        }
        for notification in notifications {
            self.scheduler.arm(notification.id);
            self.scheduled.lock().unwrap().push(notification);
        }
        Ok(())
    }

    async fn pending(&self) -> Result<Vec<i32>, NotificationError> {
        Ok(self.scheduler.pending())
    }

    async fn cancel(&self, ids: &[i32]) -> Result<(), NotificationError> {
        for id in ids {
            self.scheduler.cancel(*id);
        }
        Ok(())
    }

    fn add_listener(&self, listener: ActivationListener) -> ListenerId {
        self.registry.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.registry.remove(id)
    }

    fn remove_all_listeners(&self) {
        self.registry.clear();
    }
}

/// Disk-backed storage under a temp dir that records every write.
#[derive(Debug)]
pub struct MockStorage {
    pub inner: LocalFilesystem,
    pub writes: Mutex<Vec<WriteFile>>,
    pub fail_writes: AtomicBool,
    pub gate: Mutex<Option<async_channel::Receiver<()>>>,
}

impl MockStorage {
    pub fn writes(&self) -> Vec<WriteFile> {
        self.writes.lock().unwrap().clone()
    }

    /// Make every write wait for a message on the returned sender.
    pub fn gate(&self) -> async_channel::Sender<()> {
        let (tx, rx) = async_channel::unbounded();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }
}

#[async_trait]
impl Filesystem for MockStorage {
    async fn write_file(&self, request: WriteFile) -> Result<Url, FsError> {
        self.writes.lock().unwrap().push(request.clone());

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            let _ = gate.recv().await;
        }

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FsError::Io(std::io::Error::other("simulated write failure")));
        }
        self.inner.write_file(request).await
    }

    async fn get_uri(&self, path: &str, directory: Directory) -> Result<Url, FsError> {
        self.inner.get_uri(path, directory).await
    }

    async fn read_file(&self, path: &str, directory: Directory) -> Result<Vec<u8>, FsError> {
        self.inner.read_file(path, directory).await
    }
}

#[derive(Debug, Default)]
pub struct MockOpener {
    pub opened: Mutex<Vec<(Url, String)>>,
    pub fail: AtomicBool,
}

impl MockOpener {
    pub fn opened(&self) -> Vec<(Url, String)> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileOpener for MockOpener {
    async fn open_file(&self, uri: &Url, mime_type: &str) -> Result<(), OpenError> {
        self.opened
            .lock()
            .unwrap()
            .push((uri.clone(), mime_type.to_owned()));
        if self.fail.load(Ordering::SeqCst) {
            return Err(OpenError::PlatformError("no viewer".into()));
        }
        Ok(())
    }
}

/// Default encoder that can be told to fail.
#[derive(Debug, Default)]
pub struct MockEncoder {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

#[async_trait]
impl PayloadEncoder for MockEncoder {
    async fn encode(&self, file: &PendingFile) -> Result<String, FlowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(FlowError::Encoding("simulated encoder failure".into()));
        }
        DataUrlEncoder.encode(file).await
    }
}

/// Platform identity that can change between calls.
#[derive(Debug)]
pub struct SwitchablePlatform(pub Mutex<Platform>);

impl SwitchablePlatform {
    pub fn set(&self, platform: Platform) {
        *self.0.lock().unwrap() = platform;
    }
}

impl PlatformIdentity for SwitchablePlatform {
    fn platform(&self) -> Platform {
        self.0.lock().unwrap().clone()
    }
}

pub struct Harness {
    pub flow: DownloadFlow,
    pub notifications: Arc<MockNotifications>,
    pub storage: Arc<MockStorage>,
    pub opener: Arc<MockOpener>,
    pub encoder: Arc<MockEncoder>,
    pub platform: Arc<SwitchablePlatform>,
    pub tmp: TempDir,
}

impl Harness {
    pub fn new(platform: Platform) -> Self {
        Self::with_config(platform, FlowConfig::default())
    }

    pub fn with_config(platform: Platform, config: FlowConfig) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let notifications = Arc::new(MockNotifications::default());
        let storage = Arc::new(MockStorage {
            inner: LocalFilesystem::rooted(tmp.path()),
            writes: Mutex::default(),
            fail_writes: AtomicBool::new(false),
            gate: Mutex::default(),
        });
        let opener = Arc::new(MockOpener::default());
        let encoder = Arc::new(MockEncoder::default());
        let platform = Arc::new(SwitchablePlatform(Mutex::new(platform)));

        let capabilities = Capabilities {
            notifications: notifications.clone(),
            storage: storage.clone(),
            opener: opener.clone(),
            platform: platform.clone(),
        };

        Self {
            flow: DownloadFlow::new(capabilities, config).with_encoder(encoder.clone()),
            notifications,
            storage,
            opener,
            encoder,
            platform,
            tmp,
        }
    }

    /// On-disk location of a documents-relative path.
    pub fn documents_path(&self, relative: &str) -> std::path::PathBuf {
        self.tmp.path().join("Documents").join(relative)
    }
}
