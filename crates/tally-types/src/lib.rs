//! Foundation types for Tally.
//!
//! Tally accepts purchase receipts, scores them against a fixed rule set, and
//! hands back an opaque identifier that can later be exchanged for the score.
//! Every other Tally crate depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`Receipt`] — A submitted purchase, with amounts kept in their textual form
//! - [`Item`] — One line entry within a receipt
//! - [`ReceiptId`] — Random UUID v4 issued for each accepted receipt
//! - [`Points`] — Non-negative score computed from a receipt

pub mod error;
pub mod id;
pub mod receipt;

pub use error::TypeError;
pub use id::ReceiptId;
pub use receipt::{Item, Receipt};

/// Reward points awarded to a receipt.
pub type Points = u64;
