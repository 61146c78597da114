//! The points table.
//!
//! | Rule                      | Points                                          |
//! |---------------------------|-------------------------------------------------|
//! | [`RetailerName`]          | 1 per alphanumeric character of the retailer    |
//! | [`RoundDollarTotal`]      | 50 if the total ends in `.00`                   |
//! | [`QuarterMultipleTotal`]  | 25 if the total is a multiple of 0.25           |
//! | [`ItemPairs`]             | 5 per two items                                 |
//! | [`ItemDescriptionLength`] | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | [`OddPurchaseDay`]        | 6 if the purchase day of month is odd           |
//! | [`AfternoonPurchase`]     | 10 if bought after 14:00 and before 16:00       |

use chrono::{Datelike, Timelike};
use tally_types::{Points, Receipt};
use tracing::debug;

use crate::parse::{parse_cents, parse_date, parse_fraction, parse_time};
use crate::score::ScoringRule;

pub struct RetailerName;

impl ScoringRule for RetailerName {
    fn name(&self) -> &'static str {
        "retailer_name"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        receipt
            .retailer
            .chars()
            .filter(|c| c.is_alphanumeric())
            .count() as Points
    }
}

/// Looks at the text of the total, not its value.
pub struct RoundDollarTotal;

impl ScoringRule for RoundDollarTotal {
    fn name(&self) -> &'static str {
        "round_dollar_total"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        if receipt.total.ends_with(".00") {
            50
        } else {
            0
        }
    }
}

pub struct QuarterMultipleTotal;

impl ScoringRule for QuarterMultipleTotal {
    fn name(&self) -> &'static str {
        "quarter_multiple_total"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        // The whole-dollar part is a multiple of 25 cents, so the cents decide.
        match parse_fraction(&receipt.total) {
            Some(cents) if cents % 25 == 0 => 25,
            Some(_) => 0,
            None => {
                debug!(rule = self.name(), total = %receipt.total, "unreadable total, no points");
                0
            }
        }
    }
}

pub struct ItemPairs;

impl ScoringRule for ItemPairs {
    fn name(&self) -> &'static str {
        "item_pairs"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        (receipt.items.len() as Points / 2) * 5
    }
}

/// Applies per item. A description that trims to nothing has length zero,
/// which counts as a multiple of 3.
pub struct ItemDescriptionLength;

impl ScoringRule for ItemDescriptionLength {
    fn name(&self) -> &'static str {
        "item_description_length"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        receipt
            .items
            .iter()
            .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
            .map(|item| match parse_cents(&item.price) {
                // A fifth of the price, rounded up to a whole point.
                Some(cents) => Points::try_from(cents.div_ceil(500)).unwrap_or(Points::MAX),
                None => {
                    debug!(rule = self.name(), price = %item.price, "unreadable price, no points");
                    0
                }
            })
            .fold(0, Points::saturating_add)
    }
}

pub struct OddPurchaseDay;

impl ScoringRule for OddPurchaseDay {
    fn name(&self) -> &'static str {
        "odd_purchase_day"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match parse_date(&receipt.purchase_date) {
            Some(date) if date.day() % 2 == 1 => 6,
            _ => 0,
        }
    }
}

/// Both ends of the window are excluded: 14:00 and 16:00 earn nothing.
pub struct AfternoonPurchase;

impl AfternoonPurchase {
    const OPENS: u32 = 14 * 60;
    const CLOSES: u32 = 16 * 60;
}

impl ScoringRule for AfternoonPurchase {
    fn name(&self) -> &'static str {
        "afternoon_purchase"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        let Some(time) = parse_time(&receipt.purchase_time) else {
            debug!(rule = self.name(), time = %receipt.purchase_time, "unreadable time, no points");
            return 0;
        };
        let minute_of_day = time.hour() * 60 + time.minute();
        if minute_of_day > Self::OPENS && minute_of_day < Self::CLOSES {
            10
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::Item;

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-02".into(),
            purchase_time: "10:00".into(),
            items: vec![Item::new("Pepsi", "1.25")],
            total: "1.26".into(),
        }
    }

    #[test]
    fn retailer_counts_only_letters_and_digits() {
        let mut r = receipt();
        r.retailer = "M&M Corner Market".into();
        assert_eq!(RetailerName.points(&r), 14);
        r.retailer = "7-Eleven 2_go".into();
        assert_eq!(RetailerName.points(&r), 10);
        r.retailer = "   ".into();
        assert_eq!(RetailerName.points(&r), 0);
    }

    #[test]
    fn round_dollar_is_a_suffix_check() {
        let mut r = receipt();
        r.total = "9.00".into();
        assert_eq!(RoundDollarTotal.points(&r), 50);
        r.total = "9.50".into();
        assert_eq!(RoundDollarTotal.points(&r), 0);
        r.total = "100.10".into();
        assert_eq!(RoundDollarTotal.points(&r), 0);
    }

    #[test]
    fn quarter_multiple() {
        let mut r = receipt();
        for (total, expected) in [("9.00", 25), ("0.25", 25), ("12.75", 25), ("0.00", 25), ("35.35", 0), ("1.20", 0)] {
            r.total = total.into();
            assert_eq!(QuarterMultipleTotal.points(&r), expected, "{total}");
        }
    }

    #[test]
    fn round_total_earns_both_total_rules() {
        let mut r = receipt();
        r.total = "9.00".into();
        assert_eq!(RoundDollarTotal.points(&r) + QuarterMultipleTotal.points(&r), 75);
    }

    #[test]
    fn huge_totals_still_earn_total_rules() {
        let mut r = receipt();
        r.total = "200000000000000000.00".into();
        assert_eq!(QuarterMultipleTotal.points(&r), 25);
        assert_eq!(RoundDollarTotal.points(&r), 50);
        r.total = "99999999999999999999999999999999999999999999.75".into();
        assert_eq!(QuarterMultipleTotal.points(&r), 25);
        r.total = "99999999999999999999999999999999999999999999.10".into();
        assert_eq!(QuarterMultipleTotal.points(&r), 0);
    }

    #[test]
    fn malformed_total_contributes_nothing() {
        let mut r = receipt();
        r.total = "1e3".into();
        assert_eq!(QuarterMultipleTotal.points(&r), 0);
    }

    #[test]
    fn pairs_ignore_the_odd_item() {
        let mut r = receipt();
        let pepsi = Item::new("Pepsi", "1.25");
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10), (5, 10)] {
            r.items = vec![pepsi.clone(); count];
            assert_eq!(ItemPairs.points(&r), expected, "{count} items");
        }
    }

    #[test]
    fn description_bonus_rounds_up() {
        let mut r = receipt();
        r.items = vec![Item::new("Emils Cheese Pizza", "12.25")];
        assert_eq!(ItemDescriptionLength.points(&r), 3);
        r.items = vec![Item::new("abc", "5.00")];
        assert_eq!(ItemDescriptionLength.points(&r), 1);
        r.items = vec![Item::new("abc", "5.01")];
        assert_eq!(ItemDescriptionLength.points(&r), 2);
        r.items = vec![Item::new("abc", "0.00")];
        assert_eq!(ItemDescriptionLength.points(&r), 0);
    }

    #[test]
    fn description_length_is_trimmed() {
        let mut r = receipt();
        r.items = vec![Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")];
        assert_eq!(ItemDescriptionLength.points(&r), 3);
        r.items = vec![Item::new("Pepsi", "12.00")];
        assert_eq!(ItemDescriptionLength.points(&r), 0);
    }

    #[test]
    fn blank_description_counts_as_length_zero() {
        let mut r = receipt();
        r.items = vec![Item::new("   ", "10.00")];
        assert_eq!(ItemDescriptionLength.points(&r), 2);
    }

    #[test]
    fn description_bonus_sums_over_items() {
        let mut r = receipt();
        r.items = vec![
            Item::new("abc", "1.00"),
            Item::new("abcd", "100.00"),
            Item::new("abcdef", "7.50"),
        ];
        assert_eq!(ItemDescriptionLength.points(&r), 1 + 2);
    }

    #[test]
    fn huge_prices_earn_their_full_bonus() {
        let mut r = receipt();
        r.items = vec![Item::new("abc", "1000000000000000000.00")];
        assert_eq!(ItemDescriptionLength.points(&r), 200_000_000_000_000_000);
        r.items = vec![Item::new("abc", "99999999999999999999999.00")];
        assert_eq!(ItemDescriptionLength.points(&r), Points::MAX);
        r.items.push(Item::new("abc", "2.50"));
        assert_eq!(ItemDescriptionLength.points(&r), Points::MAX);
    }

    #[test]
    fn malformed_price_skips_only_that_item() {
        let mut r = receipt();
        r.items = vec![Item::new("abc", "2.5"), Item::new("abc", "2.50")];
        assert_eq!(ItemDescriptionLength.points(&r), 1);
    }

    #[test]
    fn unreadable_time_contributes_nothing() {
        let mut r = receipt();
        r.purchase_time = "2:30pm".into();
        assert_eq!(AfternoonPurchase.points(&r), 0);
    }

    #[test]
    fn odd_day() {
        let mut r = receipt();
        for (date, expected) in [("2022-01-01", 6), ("2022-01-31", 6), ("2022-01-02", 0), ("2022-03-20", 0)] {
            r.purchase_date = date.into();
            assert_eq!(OddPurchaseDay.points(&r), expected, "{date}");
        }
        r.purchase_date = "garbage".into();
        assert_eq!(OddPurchaseDay.points(&r), 0);
    }

    #[test]
    fn afternoon_window_is_exclusive() {
        let mut r = receipt();
        for (time, expected) in [
            ("13:59", 0),
            ("14:00", 0),
            ("14:01", 10),
            ("15:00", 10),
            ("15:59", 10),
            ("16:00", 0),
            ("02:30", 0),
            ("9:30", 0),
        ] {
            r.purchase_time = time.into();
            assert_eq!(AfternoonPurchase.points(&r), expected, "{time}");
        }
    }
}
