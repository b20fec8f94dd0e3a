//! In-memory config store.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{ConfigStore, FeedState, StoreError};

/// Keeps the feed state in memory only.
///
/// Useful for ephemeral runs without a state file, and for tests that need
/// to assert on persistence behavior: `save_count` reports how many times
/// the state was written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<FeedState>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-seeded state.
    pub fn with_state(state: FeedState) -> Self {
        Self {
            state: Mutex::new(state),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<FeedState, StoreError> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &FeedState) -> Result<(), StoreError> {
        *self.state.lock() = state.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
