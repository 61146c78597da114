use serde::Serialize;
use tally_types::{Points, Receipt};

use crate::rules::{
    AfternoonPurchase, ItemDescriptionLength, ItemPairs, OddPurchaseDay, QuarterMultipleTotal,
    RetailerName, RoundDollarTotal,
};

// ---------------------------------------------------------------------------
// ScoringRule trait
// ---------------------------------------------------------------------------

/// One independent rule of the points table.
///
/// A rule sees the whole receipt and returns what it contributes. It never
/// fails: if the field it needs cannot be read, it contributes zero.
pub trait ScoringRule: Send + Sync {
    /// Stable snake_case name, used in breakdowns and logs.
    fn name(&self) -> &'static str;

    /// Points this rule awards to the receipt.
    fn points(&self, receipt: &Receipt) -> Points;
}

/// The fixed rule set, in table order.
pub static RULES: [&dyn ScoringRule; 7] = [
    &RetailerName,
    &RoundDollarTotal,
    &QuarterMultipleTotal,
    &ItemPairs,
    &ItemDescriptionLength,
    &OddPurchaseDay,
    &AfternoonPurchase,
];

// ---------------------------------------------------------------------------
// ScoreBreakdown
// ---------------------------------------------------------------------------

/// Points awarded by a single rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: Points,
}

/// Per-rule contributions for one receipt, in table order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> Points {
        self.contributions
            .iter()
            .fold(0, |acc: Points, c| acc.saturating_add(c.points))
    }

    /// Points from the named rule, if it is part of the breakdown.
    pub fn points_for(&self, rule: &str) -> Option<Points> {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.points)
    }
}

/// Evaluate every rule against the receipt.
///
/// The receipt is expected to have passed validation.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        contributions: RULES
            .iter()
            .map(|rule| RuleContribution {
                rule: rule.name(),
                points: rule.points(receipt),
            })
            .collect(),
    }
}

/// Total points for a receipt.
pub fn score(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use proptest::prelude::*;
    use tally_types::Item;

    fn target() -> Receipt {
        Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-01".into(),
            purchase_time: "13:01".into(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".into(),
        }
    }

    fn corner_market() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".into(),
            purchase_date: "2022-03-20".into(),
            purchase_time: "14:33".into(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
            total: "9.00".into(),
        }
    }

    fn single_pepsi() -> Receipt {
        Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-01".into(),
            purchase_time: "13:01".into(),
            items: vec![Item::new("Pepsi - 12-oz", "1.25")],
            total: "35.35".into(),
        }
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn target_receipt_scores_28() {
        let b = breakdown(&target());
        assert_eq!(b.points_for("retailer_name"), Some(6));
        assert_eq!(b.points_for("item_pairs"), Some(10));
        assert_eq!(b.points_for("item_description_length"), Some(6));
        assert_eq!(b.points_for("odd_purchase_day"), Some(6));
        assert_eq!(b.total(), 28);
    }

    #[test]
    fn corner_market_receipt_scores_109() {
        let b = breakdown(&corner_market());
        assert_eq!(b.points_for("retailer_name"), Some(14));
        assert_eq!(b.points_for("round_dollar_total"), Some(50));
        assert_eq!(b.points_for("quarter_multiple_total"), Some(25));
        assert_eq!(b.points_for("item_pairs"), Some(10));
        assert_eq!(b.points_for("afternoon_purchase"), Some(10));
        assert_eq!(score(&corner_market()), 109);
    }

    #[test]
    fn single_item_receipt_scores_12() {
        assert_eq!(score(&single_pepsi()), 12);
    }

    #[test]
    fn breakdown_lists_every_rule_in_order() {
        let b = breakdown(&target());
        let names: Vec<_> = b.contributions.iter().map(|c| c.rule).collect();
        let expected: Vec<_> = RULES.iter().map(|r| r.name()).collect();
        assert_eq!(names, expected);
        assert_eq!(b.points_for("no_such_rule"), None);
    }

    #[test]
    fn breakdown_serializes_to_json() {
        let value = serde_json::to_value(breakdown(&single_pepsi())).unwrap();
        assert_eq!(value["contributions"][0]["rule"], "retailer_name");
        assert_eq!(value["contributions"][0]["points"], 6);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn amount() -> impl Strategy<Value = String> {
        (0u64..100_000).prop_map(|c| format!("{}.{:02}", c / 100, c % 100))
    }

    fn item() -> impl Strategy<Value = Item> {
        ("[A-Za-z0-9 _-]{1,24}", amount()).prop_map(|(d, p)| Item::new(d, p))
    }

    prop_compose! {
        fn well_formed_receipt()(
            retailer in "[A-Za-z0-9 &_-]{1,24}",
            (year, month, day) in (1970i32..2100, 1u32..=12, 1u32..=28),
            (hour, minute) in (0u32..24, 0u32..60),
            items in prop::collection::vec(item(), 1..8),
            total in amount(),
        ) -> Receipt {
            Receipt {
                retailer,
                purchase_date: format!("{year:04}-{month:02}-{day:02}"),
                purchase_time: format!("{hour:02}:{minute:02}"),
                items,
                total,
            }
        }
    }

    proptest! {
        #[test]
        fn generated_receipts_validate(receipt in well_formed_receipt()) {
            prop_assert_eq!(validate(&receipt), Ok(()));
        }

        #[test]
        fn scoring_is_deterministic(receipt in well_formed_receipt()) {
            prop_assert_eq!(score(&receipt), score(&receipt.clone()));
        }

        #[test]
        fn score_matches_breakdown_total(receipt in well_formed_receipt()) {
            let b = breakdown(&receipt);
            let sum: Points = b.contributions.iter().map(|c| c.points).sum();
            prop_assert_eq!(score(&receipt), sum);
        }

        #[test]
        fn score_covers_retailer_and_pairs(receipt in well_formed_receipt()) {
            let floor = receipt.retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as Points
                + (receipt.items.len() as Points / 2) * 5;
            prop_assert!(score(&receipt) >= floor);
        }
    }
}
