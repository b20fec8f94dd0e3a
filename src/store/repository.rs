//! Pattern repository - the mutation surface over the persisted state.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::{ConfigStore, FeedState, Normalization, OrderedSet, PatternKind, StoreError};

/// Working copy of the feed state, held as normalized sets.
#[derive(Debug, Clone)]
struct Sets {
    strings: OrderedSet,
    regexes: OrderedSet,
    channels: OrderedSet,
    feed_account: String,
    feed_channel: String,
}

impl Sets {
    fn from_state(state: &FeedState) -> Self {
        Self {
            strings: OrderedSet::from_items(state.stringpatterns.clone(), Normalization::Exact),
            regexes: OrderedSet::from_items(state.regexpatterns.clone(), Normalization::Exact),
            channels: OrderedSet::from_items(
                state.destination_channels.clone(),
                Normalization::IrcCasefold,
            ),
            feed_account: state.feed_account.clone(),
            feed_channel: state.feed_channel.clone(),
        }
    }

    fn to_state(&self) -> FeedState {
        FeedState {
            stringpatterns: self.strings.to_vec(),
            regexpatterns: self.regexes.to_vec(),
            destination_channels: self.channels.to_vec(),
            feed_account: self.feed_account.clone(),
            feed_channel: self.feed_channel.clone(),
        }
    }

    fn patterns_mut(&mut self, kind: PatternKind) -> &mut OrderedSet {
        match kind {
            PatternKind::String => &mut self.strings,
            PatternKind::Regex => &mut self.regexes,
        }
    }

    fn patterns(&self, kind: PatternKind) -> &OrderedSet {
        match kind {
            PatternKind::String => &self.strings,
            PatternKind::Regex => &self.regexes,
        }
    }
}

/// Repository for the pattern sets and destination channels.
///
/// Every mutation writes the full state back through the [`ConfigStore`]
/// before returning. A failed save leaves the in-memory change in place;
/// there is no rollback - the error propagates to the caller.
pub struct PatternRepository {
    store: Arc<dyn ConfigStore>,
    sets: RwLock<Sets>,
}

impl PatternRepository {
    /// Load the persisted state from the store.
    pub fn load(store: Arc<dyn ConfigStore>) -> Result<Self, StoreError> {
        let state = store.load()?;
        info!(
            strings = state.stringpatterns.len(),
            regexes = state.regexpatterns.len(),
            channels = state.destination_channels.len(),
            "feed state loaded"
        );
        Ok(Self {
            sets: RwLock::new(Sets::from_state(&state)),
            store,
        })
    }

    /// A point-in-time copy of the full state, for matching.
    pub fn snapshot(&self) -> FeedState {
        self.sets.read().to_state()
    }

    /// Members of the chosen pattern set, in insertion order.
    pub fn patterns(&self, kind: PatternKind) -> Vec<String> {
        self.sets.read().patterns(kind).to_vec()
    }

    /// Insert a pattern. An already-present value is a successful no-op,
    /// but the state is written back either way.
    pub fn add_pattern(&self, kind: PatternKind, value: &str) -> Result<bool, StoreError> {
        let mut sets = self.sets.write();
        let added = sets.patterns_mut(kind).insert(value);
        self.store.save(&sets.to_state())?;
        Ok(added)
    }

    /// Remove a pattern. Returns `false` (and persists nothing) when the
    /// value is not in the set.
    pub fn remove_pattern(&self, kind: PatternKind, value: &str) -> Result<bool, StoreError> {
        let mut sets = self.sets.write();
        if !sets.patterns_mut(kind).remove(value) {
            return Ok(false);
        }
        self.store.save(&sets.to_state())?;
        Ok(true)
    }

    /// Destination channels, in insertion order.
    pub fn destination_channels(&self) -> Vec<String> {
        self.sets.read().channels.to_vec()
    }

    /// Enable the feed for a channel. Returns `false` (and persists
    /// nothing) when the channel is already enabled.
    pub fn enable_channel(&self, channel: &str) -> Result<bool, StoreError> {
        let mut sets = self.sets.write();
        if !sets.channels.insert(channel) {
            return Ok(false);
        }
        self.store.save(&sets.to_state())?;
        Ok(true)
    }

    /// Disable the feed for a channel. Returns `false` (and persists
    /// nothing) when the channel is not enabled.
    pub fn disable_channel(&self, channel: &str) -> Result<bool, StoreError> {
        let mut sets = self.sets.write();
        if !sets.channels.remove(channel) {
            return Ok(false);
        }
        self.store.save(&sets.to_state())?;
        Ok(true)
    }
}
