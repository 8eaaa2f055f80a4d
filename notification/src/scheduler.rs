use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tracks which scheduled deliveries are still current.
///
/// Each [`arm`](Self::arm) hands out a new generation for a notification id.
/// A delivery only goes ahead if its generation is still the latest one for
/// that id, so rescheduling an id supersedes whatever was pending under it.
#[derive(Debug, Default)]
pub struct Scheduler {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    next_generation: u64,
    pending: HashMap<i32, u64>,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark `id` as pending and return the generation for this delivery.
    pub fn arm(&self, id: i32) -> u64 {
        let mut state = self.lock();
        state.next_generation += 1;
        let generation = state.next_generation;
        if state.pending.insert(id, generation).is_some() {
            log::debug!("notification {id} rescheduled, replacing pending delivery");
        }
        generation
    }

    /// Claim the delivery; false if it was superseded or cancelled.
    pub fn fire(&self, id: i32, generation: u64) -> bool {
        let mut state = self.lock();
        if state.pending.get(&id) == Some(&generation) {
            state.pending.remove(&id);
            true
        } else {
            false
        }
    }

    /// Drop the pending delivery for `id`; returns whether one existed.
    pub fn cancel(&self, id: i32) -> bool {
        self.lock().pending.remove(&id).is_some()
    }

    /// Ids with a pending delivery, ascending.
    #[must_use]
    pub fn pending(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.lock().pending.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
