mod common;

use std::sync::atomic::Ordering;
use std::time::{Duration, SystemTime};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::Harness;
use filedrop_flow::{Directory, FileTarget, FlowConfig, FlowError, NotificationCenter, Platform};

#[tokio::test]
async fn download_writes_then_schedules() {
    let h = Harness::new(Platform::Android);
    let before = SystemTime::now();

    let saved = h.flow.download_file().await.unwrap();

    assert_eq!(saved.target.path, "Download/sample.txt");
    assert_eq!(saved.notification_id, 1);

    let on_disk = h.documents_path("Download/sample.txt");
    assert_eq!(
        std::fs::read_to_string(&on_disk).unwrap(),
        "This is a sample text file."
    );
    assert_eq!(saved.uri, url::Url::from_file_path(&on_disk).unwrap());

    let writes = h.storage.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].directory, Directory::Documents);
    assert!(writes[0].recursive);

    let scheduled = h.notifications.scheduled();
    assert_eq!(scheduled.len(), 1);
    let notification = &scheduled[0];
    assert_eq!(notification.id, 1);
    assert_eq!(notification.title, "Download Complete");
    assert_eq!(notification.body, "Tap to open the file");

    let at = notification.schedule.unwrap().at;
    let delay = at.duration_since(before).unwrap();
    assert!(delay >= Duration::from_millis(1000), "{delay:?}");
    assert!(delay < Duration::from_secs(5), "{delay:?}");

    let target = FileTarget::from_extra(notification.extra.as_ref().unwrap()).unwrap();
    assert_eq!(target, saved.target);
}

#[tokio::test]
async fn ios_writes_the_bare_name() {
    let h = Harness::new(Platform::Ios);

    let saved = h.flow.download_file().await.unwrap();

    assert_eq!(saved.target.path, "sample.txt");
    assert!(h.documents_path("sample.txt").is_file());
    assert_eq!(h.storage.writes()[0].path, "sample.txt");
}

#[tokio::test]
async fn only_the_exact_ios_identifier_keeps_the_bare_name() {
    let h = Harness::new(Platform::from_identifier("iOS"));

    let saved = h.flow.download_file().await.unwrap();

    assert_eq!(saved.target.path, "Download/sample.txt");
    assert!(h.documents_path("Download/sample.txt").is_file());
    assert!(!h.documents_path("sample.txt").exists());
}

#[tokio::test]
async fn repeated_downloads_reschedule_the_same_id() {
    let h = Harness::new(Platform::Android);

    h.flow.download_file().await.unwrap();
    h.flow.download_file().await.unwrap();

    let writes = h.storage.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].path, writes[1].path);
    assert_eq!(writes[0].data, writes[1].data);
    assert_eq!(
        STANDARD.decode(&writes[1].data).unwrap(),
        b"This is a sample text file."
    );

    let scheduled = h.notifications.scheduled();
    assert_eq!(scheduled.len(), 2);
    assert!(scheduled.iter().all(|n| n.id == 1));
    assert_eq!(h.notifications.pending().await.unwrap(), vec![1]);
}

#[tokio::test]
async fn storage_failure_skips_the_notification() {
    let h = Harness::new(Platform::Android);
    h.storage.fail_writes.store(true, Ordering::SeqCst);

    let err = h.flow.download_file().await.unwrap_err();
    assert!(matches!(err, FlowError::Storage(_)), "{err}");
    assert!(h.notifications.scheduled().is_empty());

    assert!(h.flow.on_download_pressed().await.is_none());
    assert!(h.notifications.scheduled().is_empty());
    assert_eq!(h.storage.writes().len(), 2);
}

#[tokio::test]
async fn encoding_failure_skips_write_and_notification() {
    let h = Harness::new(Platform::Android);
    h.encoder.fail.store(true, Ordering::SeqCst);

    let err = h.flow.download_file().await.unwrap_err();
    assert!(matches!(err, FlowError::Encoding(_)), "{err}");
    assert!(h.storage.writes().is_empty());
    assert!(h.notifications.scheduled().is_empty());

    assert!(h.flow.on_download_pressed().await.is_none());
    assert_eq!(h.encoder.calls.load(Ordering::SeqCst), 2);
    assert!(h.storage.writes().is_empty());
    assert!(!h.documents_path("Download/sample.txt").exists());

    h.encoder.fail.store(false, Ordering::SeqCst);
    assert!(h.flow.on_download_pressed().await.is_some());
    assert_eq!(h.notifications.scheduled().len(), 1);
}

#[tokio::test]
async fn notification_failure_leaves_the_file_written() {
    let h = Harness::new(Platform::Android);
    h.notifications.fail_schedule.store(true, Ordering::SeqCst);

    let err = h.flow.download_file().await.unwrap_err();
    assert!(matches!(err, FlowError::Notification(_)), "{err}");
    assert!(h.documents_path("Download/sample.txt").is_file());
}

#[tokio::test]
async fn flow_stays_usable_after_a_failure() {
    let h = Harness::new(Platform::Android);
    h.storage.fail_writes.store(true, Ordering::SeqCst);
    assert!(h.flow.on_download_pressed().await.is_none());

    h.storage.fail_writes.store(false, Ordering::SeqCst);
    let saved = h.flow.on_download_pressed().await.unwrap();
    assert_eq!(saved.target.path, "Download/sample.txt");
    assert_eq!(h.notifications.scheduled().len(), 1);
}

#[tokio::test]
async fn single_flight_rejects_overlapping_downloads() {
    let config = FlowConfig {
        single_flight: true,
        ..FlowConfig::default()
    };
    let h = Harness::with_config(Platform::Android, config);
    let gate = h.storage.gate();

    let (first, second) = futures::join!(h.flow.download_file(), async {
        let second = h.flow.download_file().await;
        gate.send(()).await.unwrap();
        second
    });

    assert!(first.is_ok());
    assert!(matches!(second, Err(FlowError::InFlight)));
    assert!(!h.flow.is_downloading());

    gate.send(()).await.unwrap();
    assert!(h.flow.download_file().await.is_ok());
    assert_eq!(h.notifications.scheduled().len(), 2);
}

#[tokio::test]
async fn overlapping_downloads_both_run_by_default() {
    let h = Harness::new(Platform::Android);
    let gate = h.storage.gate();
    gate.send(()).await.unwrap();
    gate.send(()).await.unwrap();

    let (first, second) = futures::join!(h.flow.download_file(), h.flow.download_file());

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(h.notifications.scheduled().len(), 2);
    assert_eq!(h.notifications.pending().await.unwrap(), vec![1]);
}

#[tokio::test]
async fn custom_config_changes_names_and_id() {
    let config: FlowConfig = serde_json::from_str(
        r#"{ "fileName": "notes.txt", "downloadDir": "Downloads", "notificationId": 9 }"#,
    )
    .unwrap();
    let h = Harness::with_config(Platform::Android, config);

    let saved = h.flow.download_file().await.unwrap();

    assert_eq!(saved.target.path, "Downloads/notes.txt");
    assert_eq!(saved.notification_id, 9);
    assert_eq!(h.notifications.scheduled()[0].id, 9);
}
