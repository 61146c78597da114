use tally_types::{Points, Receipt, ReceiptId};

/// A receipt together with the points it was awarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: Points,
}
