use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use tally_types::ReceiptId;

use crate::error::StoreResult;
use crate::record::ScoredReceipt;
use crate::traits::ScoreStore;

/// In-memory, HashMap-based score store.
///
/// The process-lifetime backend. All records are held in memory behind a
/// `RwLock` for safe concurrent access; the write lock is the single
/// mutual-exclusion guard the insert-once contract needs.
pub struct InMemoryScoreStore {
    records: RwLock<HashMap<ReceiptId, ScoredReceipt>>,
}

impl InMemoryScoreStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn put_if_absent(&self, record: ScoredReceipt) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        match map.entry(record.id) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(true)
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Option<ScoredReceipt>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(id).copied())
    }
}

impl std::fmt::Debug for InMemoryScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryScoreStore")
            .field("record_count", &self.len())
            .finish()
    }
}
