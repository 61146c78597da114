use std::sync::Arc;

use tally_rules::{score, validate};
use tally_store::{InMemoryPointsStore, PointsStore, StoreError};
use tally_types::{Points, Receipt, ReceiptId};
use tracing::debug;

use crate::error::IntakeError;

/// The intake pipeline: validate, score, store on the way in; look up on the
/// way out.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn PointsStore>,
}

impl IntakeService {
    pub fn new(store: Arc<dyn PointsStore>) -> Self {
        Self { store }
    }

    /// A service backed by a fresh [`InMemoryPointsStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPointsStore::new()))
    }

    pub fn store(&self) -> &dyn PointsStore {
        self.store.as_ref()
    }

    /// Accept a receipt and return its new identifier.
    ///
    /// Nothing is stored unless the receipt validates.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptId, IntakeError> {
        if let Err(err) = validate(&receipt) {
            debug!(error = %err, "receipt rejected");
            return Err(err.into());
        }
        let points = score(&receipt);
        let id = self.store.put(receipt, points);
        debug!(%id, points, "receipt processed");
        Ok(id)
    }

    /// Points for a previously issued identifier.
    ///
    /// Identifiers that were never issued and strings that are not
    /// identifiers at all are both `NotFound`.
    pub fn points(&self, id: &str) -> Result<Points, IntakeError> {
        let Ok(parsed) = ReceiptId::parse(id) else {
            return Err(IntakeError::NotFound(id.to_string()));
        };
        self.store.points(&parsed).map_err(|err| match err {
            StoreError::NotFound(id) => IntakeError::NotFound(id.to_string()),
        })
    }
}

impl std::fmt::Debug for IntakeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeService")
            .field("records", &self.store.len())
            .finish()
    }
}
