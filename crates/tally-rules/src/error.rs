/// The first validation rule a receipt failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid retailer: {0:?}")]
    Retailer(String),

    #[error("invalid purchase date: {0:?}")]
    PurchaseDate(String),

    #[error("invalid purchase time: {0:?}")]
    PurchaseTime(String),

    #[error("invalid total: {0:?}")]
    Total(String),

    #[error("receipt must have at least one item")]
    NoItems,

    #[error("invalid description for item {index}: {value:?}")]
    ItemDescription { index: usize, value: String },

    #[error("invalid price for item {index}: {value:?}")]
    ItemPrice { index: usize, value: String },
}
