use std::sync::LazyLock;

use regex::Regex;
use tally_types::Receipt;

use crate::error::ValidationError;
use crate::parse::{is_amount, parse_date, parse_time};

// ASCII word characters; whitespace is tab, newline, form feed, carriage
// return and space (no vertical tab).
static RETAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\t\n\f\r &-]+$").expect("invalid retailer regex")
});

static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\t\n\f\r -]+$").expect("invalid description regex")
});

/// Check a receipt against the fixed field formats.
///
/// Checks run in field order (retailer, date, time, total, items) and the
/// first failure is returned. A receipt that passes is safe to score and
/// store.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if !RETAILER.is_match(&receipt.retailer) {
        return Err(ValidationError::Retailer(receipt.retailer.clone()));
    }

    if parse_date(&receipt.purchase_date).is_none() {
        return Err(ValidationError::PurchaseDate(receipt.purchase_date.clone()));
    }

    if parse_time(&receipt.purchase_time).is_none() {
        return Err(ValidationError::PurchaseTime(receipt.purchase_time.clone()));
    }

    if !is_amount(&receipt.total) {
        return Err(ValidationError::Total(receipt.total.clone()));
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if !DESCRIPTION.is_match(&item.short_description) {
            return Err(ValidationError::ItemDescription {
                index,
                value: item.short_description.clone(),
            });
        }
        if !is_amount(&item.price) {
            return Err(ValidationError::ItemPrice {
                index,
                value: item.price.clone(),
            });
        }
    }

    Ok(())
}
