use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_types::{Points, Receipt, ReceiptId};
use tracing::trace;

use crate::record::ScoreRecord;
use crate::traits::PointsStore;

/// In-memory, HashMap-based points store.
///
/// Records sit behind a single `RwLock` and are handed out as shared
/// `Arc`s, so readers never copy a receipt. A poisoned lock is recovered
/// rather than propagated: records are immutable and an insert is a single
/// map operation, so the map is consistent even if a holder panicked.
pub struct InMemoryPointsStore {
    records: RwLock<HashMap<ReceiptId, Arc<ScoreRecord>>>,
}

impl InMemoryPointsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Arc<ScoreRecord>>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Arc<ScoreRecord>>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryPointsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsStore for InMemoryPointsStore {
    fn put(&self, receipt: Receipt, points: Points) -> ReceiptId {
        let mut map = self.write();
        // A v4 collision is not expected, but an id must never be reused.
        let id = loop {
            let candidate = ReceiptId::new();
            if !map.contains_key(&candidate) {
                break candidate;
            }
        };
        map.insert(id, Arc::new(ScoreRecord { id, receipt, points }));
        trace!(%id, points, "record inserted");
        id
    }

    fn get(&self, id: &ReceiptId) -> Option<Arc<ScoreRecord>> {
        self.read().get(id).cloned()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

impl std::fmt::Debug for InMemoryPointsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryPointsStore")
            .field("record_count", &count)
            .finish()
    }
}
