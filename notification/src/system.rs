//! The platform notification center.

use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use filedrop_permission::{Permission, PermissionStatus};
use log::{debug, warn};

use crate::{
    ActivationEvent, ActivationListener, ListenerId, ListenerRegistry, LocalNotification,
    NotificationCenter, NotificationError, Scheduler, sys,
};

#[derive(Debug, Default)]
struct Inner {
    registry: ListenerRegistry,
    scheduler: Scheduler,
}

/// Posts notifications through the operating system.
///
/// Each scheduled notification waits on its own thread until it is due, then
/// is shown unless a later schedule with the same id superseded it.
#[derive(Debug, Clone, Default)]
pub struct SystemNotifications {
    inner: Arc<Inner>,
}

impl SystemNotifications {
    /// Create a notification center with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners registered on this center.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.inner.registry
    }

    fn spawn_delivery(&self, notification: LocalNotification) -> Result<(), NotificationError> {
        let id = notification.id;
        let delay = notification
            .schedule
            .map(|schedule| schedule.remaining(SystemTime::now()))
            .unwrap_or_default();
        let generation = self.inner.scheduler.arm(id);
        let inner = self.inner.clone();

        std::thread::Builder::new()
            .name(format!("notification-{id}"))
            .spawn(move || {
                std::thread::sleep(delay);
                if !inner.scheduler.fire(id, generation) {
                    debug!("notification {id} superseded before delivery");
                    return;
                }

                let registry = inner.registry.clone();
                let event = ActivationEvent::tap(notification.clone());
                let result = sys::present(&notification, move || {
                    let delivered = registry.emit(&event);
                    debug!("notification {id} activated, {delivered} listener(s) notified");
                });
                if let Err(err) = result {
                    warn!("failed to show notification {id}: {err}");
                }
            })
            .map(|_| ())
            .map_err(|e| NotificationError::Platform(e.to_string()))
    }
}

#[async_trait]
impl NotificationCenter for SystemNotifications {
    async fn request_permissions(&self) -> Result<PermissionStatus, NotificationError> {
        Ok(filedrop_permission::request(Permission::Notifications).await?)
    }

    async fn schedule(
        &self,
        notifications: Vec<LocalNotification>,
    ) -> Result<(), NotificationError> {
        if !sys::SUPPORTED {
            return Err(NotificationError::NotSupported);
        }
        for notification in notifications {
            debug!("scheduling notification {}", notification.id);
            self.spawn_delivery(notification)?;
        }
        Ok(())
    }

    async fn pending(&self) -> Result<Vec<i32>, NotificationError> {
        Ok(self.inner.scheduler.pending())
    }

    async fn cancel(&self, ids: &[i32]) -> Result<(), NotificationError> {
        for id in ids {
            self.inner.scheduler.cancel(*id);
        }
        Ok(())
    }

    fn add_listener(&self, listener: ActivationListener) -> ListenerId {
        self.inner.registry.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.registry.remove(id)
    }

    fn remove_all_listeners(&self) {
        let removed = self.inner.registry.clear();
        debug!("removed {removed} notification listener(s)");
    }
}
