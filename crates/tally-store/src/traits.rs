use std::sync::Arc;

use tally_types::{Points, Receipt, ReceiptId};

use crate::error::{StoreError, StoreResult};
use crate::record::ScoreRecord;

/// Registry of scored receipts.
///
/// All implementations must satisfy these invariants:
/// - `put` never fails and never hands out an identifier twice.
/// - A record is visible to `get` as soon as `put` returns, and never changes.
/// - Concurrent lookups do not block one another.
pub trait PointsStore: Send + Sync {
    /// Store a validated receipt with its points and return the new identifier.
    fn put(&self, receipt: Receipt, points: Points) -> ReceiptId;

    /// Fetch the full record for an identifier.
    fn get(&self, id: &ReceiptId) -> Option<Arc<ScoreRecord>>;

    /// Number of records held.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points stored for an identifier.
    ///
    /// Default implementation reads the record through `get`.
    fn points(&self, id: &ReceiptId) -> StoreResult<Points> {
        self.get(id)
            .map(|record| record.points)
            .ok_or(StoreError::NotFound(*id))
    }
}
