use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::store::{KeyValueStore, StorageError};

pub const HISTORY_KEY: &str = "praise-history";
pub const MAX_HISTORY: usize = 2;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to persist history: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub replies: Vec<String>,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
}

/// The last [`MAX_HISTORY`] generation results, most recent first, mirrored
/// to a [`KeyValueStore`] on every change.
#[derive(Debug)]
pub struct HistoryCache<S: KeyValueStore> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryCache<S> {
    /// Reads persisted history. Missing or unreadable data yields an empty cache.
    pub fn load(store: S) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(MAX_HISTORY);
                    entries
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load history, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read history, starting empty");
                Vec::new()
            }
        };

        Self { store, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn record(&mut self, replies: Vec<String>) -> Result<&HistoryEntry, HistoryError> {
        self.record_at(replies, Utc::now().timestamp_millis())
    }

    /// Prepends an entry and persists the truncated list. The in-memory list
    /// only changes once the write succeeded.
    pub fn record_at(
        &mut self,
        replies: Vec<String>,
        timestamp: i64,
    ) -> Result<&HistoryEntry, HistoryError> {
        let mut updated = Vec::with_capacity(MAX_HISTORY);
        updated.push(HistoryEntry { replies, timestamp });
        updated.extend(self.entries.iter().take(MAX_HISTORY - 1).cloned());

        let raw = serde_json::to_string(&updated)?;
        self.store.set(HISTORY_KEY, &raw)?;

        self.entries = updated;
        Ok(&self.entries[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::store::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::IoError(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::IoError(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn unreadable_store_loads_empty() {
        let cache = HistoryCache::load(FailingStore);
        assert!(cache.entries().is_empty());
    }

    #[test]
    fn failed_write_leaves_memory_untouched() {
        let mut cache = HistoryCache::load(FailingStore);
        assert!(cache.record(vec!["a".to_string()]).is_err());
        assert!(cache.entries().is_empty());
    }

    #[test]
    fn oversized_persisted_list_is_truncated_on_load() {
        let store = MemoryStore::new();
        store
            .set(
                HISTORY_KEY,
                r#"[{"replies":["a"],"timestamp":3},{"replies":["b"],"timestamp":2},{"replies":["c"],"timestamp":1}]"#,
            )
            .unwrap();

        let cache = HistoryCache::load(store);
        assert_eq!(cache.entries().len(), MAX_HISTORY);
        assert_eq!(cache.latest().unwrap().timestamp, 3);
    }
}
