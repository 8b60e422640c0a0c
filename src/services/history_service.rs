use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::file_service::KeyValueStore;
use crate::error::StorageError;
use crate::models::{HistoryItem, NewHistoryItem};

pub const HISTORY_KEY: &str = "academic_assistant_history";
pub const HISTORY_CAPACITY: usize = 20;

/// Log of recent user actions, newest first.
///
/// Storage failures never reach callers: reads degrade to an empty list and
/// writes become no-ops, both logged.
pub trait HistoryStore: Send + Sync {
    fn list(&self) -> Vec<HistoryItem>;

    /// Stores the entry and returns it with its assigned id and timestamp,
    /// or `None` when it could not be persisted.
    fn append(&self, entry: NewHistoryItem) -> Option<HistoryItem>;

    fn clear(&self);

    fn get(&self, id: &str) -> Option<HistoryItem> {
        self.list().into_iter().find(|item| item.id == id)
    }
}

/// `HistoryStore` persisted as one JSON array under a single key.
pub struct KvHistoryStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    capacity: usize,
}

impl KvHistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: HISTORY_KEY.to_string(),
            capacity: HISTORY_CAPACITY,
        }
    }

    fn read(&self) -> Result<Vec<HistoryItem>, StorageError> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, items: &[HistoryItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.key, &raw)
    }
}

impl HistoryStore for KvHistoryStore {
    fn list(&self) -> Vec<HistoryItem> {
        self.read().unwrap_or_else(|e| {
            tracing::warn!("Failed to parse history: {}", e);
            Vec::new()
        })
    }

    fn append(&self, entry: NewHistoryItem) -> Option<HistoryItem> {
        let mut items = self.list();

        // Keep the list ordered even if the wall clock steps backwards.
        let newest = items.first().map(|item| item.timestamp).unwrap_or(i64::MIN);
        let timestamp = Utc::now().timestamp_millis().max(newest);
        let item = entry.into_item(Uuid::new_v4().to_string(), timestamp);

        items.insert(0, item.clone());
        items.truncate(self.capacity);

        match self.write(&items) {
            Ok(()) => {
                tracing::debug!(id = %item.id, kind = ?item.kind, "history entry saved");
                Some(item)
            }
            Err(e) => {
                tracing::warn!("Failed to save history: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!("Failed to clear history: {}", e);
        }
    }
}
