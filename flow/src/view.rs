use std::fmt;
use std::sync::Arc;

use async_channel::{Receiver, bounded};
use filedrop_notification::{ActivationEvent, ListenerId};
use log::{debug, error, warn};
use url::Url;

use crate::{DownloadFlow, FlowError, ListenerScope};

/// Activations queued while nobody drains the view; later ones are dropped.
pub const ACTIVATION_QUEUE: usize = 8;

/// A view the flow is attached to.
///
/// Holds the activation listener registered on mount. Dropping the view (or
/// calling [`unmount`](Self::unmount)) deregisters it; afterwards no activation
/// reaches the flow through this view.
pub struct MountedView<'a> {
    flow: &'a DownloadFlow,
    listener: ListenerId,
    events: Receiver<ActivationEvent>,
}

impl fmt::Debug for MountedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedView")
            .field("listener", &self.listener)
            .field("queued", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<'a> MountedView<'a> {
    pub(crate) fn attach(flow: &'a DownloadFlow) -> Self {
        let (sender, events) = bounded(ACTIVATION_QUEUE);
        let wanted = flow.config().notification_id;

        let listener = flow
            .capabilities()
            .notifications
            .add_listener(Arc::new(move |event: &ActivationEvent| {
                if event.id() != wanted {
                    return;
                }
                if let Err(err) = sender.try_send(event.clone()) {
                    warn!("dropping activation event: {err}");
                }
            }));
        debug!("mounted with {listener}");

        Self {
            flow,
            listener,
            events,
        }
    }

    /// Handle returned by the notification provider on mount.
    #[must_use]
    pub const fn listener(&self) -> ListenerId {
        self.listener
    }

    /// Next matching activation, `None` once the listener is gone.
    pub async fn next_activation(&self) -> Option<ActivationEvent> {
        self.events.recv().await.ok()
    }

    /// A queued activation, if one is waiting.
    #[must_use]
    pub fn try_next_activation(&self) -> Option<ActivationEvent> {
        self.events.try_recv().ok()
    }

    /// Wait for the next matching activation and open the file for it.
    ///
    /// Returns `None` once the listener is gone.
    pub async fn process_next(&self) -> Option<Result<Url, FlowError>> {
        loop {
            let event = self.next_activation().await?;
            if let Some(result) = self.flow.handle_activation(&event).await {
                return Some(result);
            }
        }
    }

    /// Open the file for every activation until the listener is gone.
    ///
    /// Failures are logged and do not stop the loop.
    pub async fn run(&self) {
        while let Some(result) = self.process_next().await {
            match result {
                Ok(uri) => debug!("opened {uri}"),
                Err(err) => error!("Failed to open file: {err}"),
            }
        }
    }

    /// Tear the view down.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountedView<'_> {
    fn drop(&mut self) {
        let notifications = &self.flow.capabilities().notifications;
        match self.flow.config().teardown {
            ListenerScope::Own => {
                if !notifications.remove_listener(self.listener) {
                    debug!("{} was already removed", self.listener);
                }
            }
            ListenerScope::All => notifications.remove_all_listeners(),
        }
        self.events.close();
    }
}
