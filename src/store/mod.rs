//! Pattern store - persisted feed configuration.
//!
//! The bot's mutable state (pattern sets, destination channels, feed source)
//! lives in a [`FeedState`] that is written back through a [`ConfigStore`]
//! after every mutation. The default store is a JSON file; an in-memory
//! store exists for ephemeral runs and tests.

mod file;
mod memory;
mod model;
mod repository;
mod set;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use model::{FeedState, PatternKind};
pub use repository::PatternRepository;
pub use set::{Normalization, OrderedSet};

/// Persistence backend for the feed state.
///
/// Implementations are expected to be immediately consistent: when `save`
/// returns `Ok`, the state is durable. There is no batching and no rollback.
pub trait ConfigStore: Send + Sync {
    /// Load the persisted state. A backend with nothing stored yet returns
    /// the default (empty) state rather than an error.
    fn load(&self) -> Result<FeedState, StoreError>;

    /// Persist the given state, replacing whatever was stored before.
    fn save(&self, state: &FeedState) -> Result<(), StoreError>;
}

/// Errors from loading or persisting the feed state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read.
    #[error("reading state from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The backing file could not be written or replaced.
    #[error("writing state to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// The stored state did not parse as a `FeedState`.
    #[error("malformed state in {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    /// The state could not be serialized.
    #[error("encoding state: {0}")]
    Encode(#[from] serde_json::Error),
}
