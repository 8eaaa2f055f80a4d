//! Cross-platform local notifications.
//!
//! Notifications are scheduled through a [`NotificationCenter`]. When the user
//! taps one, every registered activation listener receives an [`ActivationEvent`].
//! Listeners are identified by the [`ListenerId`] returned on registration, so a
//! component can deregister exactly what it added.

#![warn(missing_docs)]

mod registry;
mod scheduler;
mod system;

/// Platform-specific implementations.
pub mod sys;

use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use filedrop_permission::PermissionStatus;
pub use registry::{ActivationListener, ListenerId, ListenerRegistry};
pub use scheduler::Scheduler;
pub use system::SystemNotifications;

/// Action id reported when the notification body itself is tapped.
pub const TAP_ACTION: &str = "tap";

/// When a notification should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Wall-clock delivery time.
    pub at: SystemTime,
}

impl Schedule {
    /// Deliver at `at`.
    #[must_use]
    pub const fn at(at: SystemTime) -> Self {
        Self { at }
    }

    /// Deliver `delay` from now.
    #[must_use]
    pub fn after(delay: Duration) -> Self {
        Self {
            at: SystemTime::now() + delay,
        }
    }

    /// Time left until delivery, zero if already due.
    #[must_use]
    pub fn remaining(&self, now: SystemTime) -> Duration {
        self.at.duration_since(now).unwrap_or(Duration::ZERO)
    }
}

/// A local notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalNotification {
    /// Identifier; scheduling the same id again replaces the pending one.
    pub id: i32,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Delivery time, `None` to deliver immediately.
    pub schedule: Option<Schedule>,
    /// Opaque data handed back on activation.
    pub extra: Option<serde_json::Value>,
}

impl LocalNotification {
    /// Create an empty notification with the given id.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            schedule: None,
            extra: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the delivery schedule.
    #[must_use]
    pub const fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Attach data that is returned with the activation event.
    #[must_use]
    pub fn extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Delivered when the user interacts with a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationEvent {
    /// Which action was performed, [`TAP_ACTION`] for the body.
    pub action_id: String,
    /// Text typed into an input action, if any.
    pub input_value: Option<String>,
    /// The notification that was activated.
    pub notification: LocalNotification,
}

impl ActivationEvent {
    /// A plain tap on `notification`.
    #[must_use]
    pub fn tap(notification: LocalNotification) -> Self {
        Self {
            action_id: TAP_ACTION.to_owned(),
            input_value: None,
            notification,
        }
    }

    /// Id of the activated notification.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.notification.id
    }
}

/// Errors that can occur when scheduling notifications.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Local notifications are not supported on this platform.
    #[error("local notifications are not supported on this platform")]
    NotSupported,

    /// The permission request failed.
    #[error("permission error: {0}")]
    Permission(#[from] filedrop_permission::PermissionError),

    /// The platform rejected the notification.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Permission, scheduling and activation-listener capability.
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Ask the user for permission to post notifications.
    ///
    /// # Errors
    /// Returns an error if the permission request itself fails.
    async fn request_permissions(&self) -> Result<PermissionStatus, NotificationError>;

    /// Schedule notifications, replacing any pending ones with the same id.
    ///
    /// # Errors
    /// Returns an error if the platform rejects the request.
    async fn schedule(&self, notifications: Vec<LocalNotification>)
    -> Result<(), NotificationError>;

    /// Ids of notifications scheduled but not yet delivered.
    ///
    /// # Errors
    /// Returns an error if the platform cannot be queried.
    async fn pending(&self) -> Result<Vec<i32>, NotificationError>;

    /// Cancel pending notifications.
    ///
    /// # Errors
    /// Returns an error if the platform rejects the request.
    async fn cancel(&self, ids: &[i32]) -> Result<(), NotificationError>;

    /// Register an activation listener.
    fn add_listener(&self, listener: ActivationListener) -> ListenerId;

    /// Remove one listener; returns whether it was registered.
    fn remove_listener(&self, id: ListenerId) -> bool;

    /// Remove every listener, including ones registered by other components.
    fn remove_all_listeners(&self);
}
