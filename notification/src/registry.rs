use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ActivationEvent;

/// Callback invoked for every activation event.
pub type ActivationListener = Arc<dyn Fn(&ActivationEvent) + Send + Sync>;

/// Handle returned by listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

#[derive(Default)]
struct State {
    next_id: u64,
    listeners: Vec<(ListenerId, ActivationListener)>,
}

/// Thread-safe set of activation listeners.
///
/// Cloning shares the same set.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    state: Arc<Mutex<State>>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener.
    pub fn add(&self, listener: ActivationListener) -> ListenerId {
        let mut state = self.lock();
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        state.listeners.push((id, listener));
        id
    }

    /// Remove one listener; returns whether it was present.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut state = self.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    /// Remove all listeners; returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut state = self.lock();
        let removed = state.listeners.len();
        state.listeners.clear();
        removed
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver an event to every listener; returns how many were called.
    ///
    /// Listeners run outside the lock, so they may add or remove listeners.
    pub fn emit(&self, event: &ActivationEvent) -> usize {
        let snapshot: Vec<ActivationListener> = self
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }
}
