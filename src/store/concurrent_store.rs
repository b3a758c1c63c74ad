use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use tracing::debug;
use tracing::trace;

use crate::StoreConfig;

/// A single key-value pair captured from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: u64,
    pub value: String,
}

/// Thread-safe key-value store backed by a sharded concurrent map
///
/// All operations take `&self` and are safe to call from any number of
/// threads or tasks at once. Per-key operations are atomic; aggregate
/// views like [`len`](Self::len) and [`snapshot`](Self::snapshot) are
/// point-in-time and may trail concurrent writers.
pub struct ConcurrentStore {
    entries: DashMap<u64, String>,
}

impl ConcurrentStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Build a store sized from a validated [`StoreConfig`]
    pub fn with_config(config: &StoreConfig) -> Self {
        let entries = if config.shard_amount == 0 {
            DashMap::with_capacity(config.initial_capacity)
        } else {
            DashMap::with_capacity_and_shard_amount(config.initial_capacity, config.shard_amount)
        };
        Self { entries }
    }

    /// Insert `value` under `key` if the key is absent.
    ///
    /// Returns `true` when the entry was inserted, `false` when the key
    /// already exists. An existing value is never overwritten here; use
    /// [`update`](Self::update) for upserts.
    pub fn add(
        &self,
        key: u64,
        value: String,
    ) -> bool {
        match self.entries.entry(key) {
            MapEntry::Occupied(_) => {
                trace!(key, "add skipped, key already present");
                false
            }
            MapEntry::Vacant(slot) => {
                slot.insert(value);
                trace!(key, "entry added");
                true
            }
        }
    }

    /// Remove the entry under `key`.
    ///
    /// Returns `true` when an entry was removed, `false` when the key was
    /// not present.
    pub fn remove(
        &self,
        key: u64,
    ) -> bool {
        let removed = self.entries.remove(&key).is_some();
        trace!(key, removed, "entry removal");
        removed
    }

    /// Whether an entry exists under `key`
    pub fn contains_key(
        &self,
        key: u64,
    ) -> bool {
        self.entries.contains_key(&key)
    }

    /// Clone out the value under `key`, if any
    pub fn get(
        &self,
        key: u64,
    ) -> Option<String> {
        self.entries.get(&key).map(|entry| entry.value().clone())
    }

    /// Insert or overwrite the value under `key`.
    ///
    /// Returns the previous value when the key was already present.
    pub fn update(
        &self,
        key: u64,
        value: String,
    ) -> Option<String> {
        let previous = self.entries.insert(key, value);
        trace!(key, replaced = previous.is_some(), "entry updated");
        previous
    }

    /// Number of entries currently stored.
    ///
    /// Point-in-time view; concurrent writers may change it immediately
    /// after this returns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&self) {
        let drained = self.entries.len();
        self.entries.clear();
        debug!(drained, "store cleared");
    }

    /// Capture a detached copy of all current entries.
    ///
    /// The returned entries are owned clones; mutations after the capture
    /// are not reflected in them. Iteration order is unspecified.
    pub fn snapshot(&self) -> Vec<Entry> {
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .map(|item| Entry {
                key: *item.key(),
                value: item.value().clone(),
            })
            .collect();
        trace!(count = entries.len(), "snapshot captured");
        entries
    }
}

impl Default for ConcurrentStore {
    fn default() -> Self {
        Self::new()
    }
}
