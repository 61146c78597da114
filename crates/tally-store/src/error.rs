use tally_types::ReceiptId;

/// Errors from points store operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record exists for the identifier.
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
