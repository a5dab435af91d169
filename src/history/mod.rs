//! Bounded, persisted record of the most recent generation results.

pub mod cache;
pub mod store;

pub use cache::{HistoryCache, HistoryEntry, HistoryError, HISTORY_KEY, MAX_HISTORY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};
