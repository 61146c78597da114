//! Receipt validation and scoring for Tally.
//!
//! Both halves are pure functions of a [`Receipt`](tally_types::Receipt):
//! no state, no I/O, safe to call from any number of threads at once.
//!
//! # Validation
//!
//! [`validate`] checks every field against its fixed format and reports the
//! first rule that fails as a [`ValidationError`]. Callers outside the core
//! collapse every variant into one generic "invalid receipt" answer; the
//! variants exist for tests and debug logging.
//!
//! # Scoring
//!
//! [`score`] sums the contributions of a fixed set of [`ScoringRule`]s. Rules
//! are independent: each looks at the whole receipt, none short-circuits
//! another, and a rule that cannot read the field it needs contributes zero
//! instead of failing the whole computation. [`breakdown`] exposes the
//! per-rule contributions.

pub mod error;
pub mod parse;
pub mod rules;
pub mod score;
pub mod validate;

pub use error::ValidationError;
pub use rules::{
    AfternoonPurchase, ItemDescriptionLength, ItemPairs, OddPurchaseDay, QuarterMultipleTotal,
    RetailerName, RoundDollarTotal,
};
pub use score::{breakdown, score, RuleContribution, ScoreBreakdown, ScoringRule, RULES};
pub use validate::validate;
