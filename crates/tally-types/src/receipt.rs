use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by a client.
///
/// Dates, times and amounts stay in their textual form: validation checks the
/// exact spelling (`"12.30"` is not `"12.3"`), and scoring looks at the text
/// as well as the value. A `Receipt` carries no guarantee of validity on its
/// own; see `tally_rules::validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time of day, 24-hour `HH:MM`, no timezone.
    pub purchase_time: String,
    /// Line items, in receipt order.
    pub items: Vec<Item>,
    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
}

/// One line entry within a receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description.
    pub short_description: String,
    /// Price paid for the item, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}
