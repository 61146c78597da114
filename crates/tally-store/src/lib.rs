//! Score storage for Tally.
//!
//! Every accepted receipt is kept as an immutable [`ScoreRecord`] under a
//! freshly generated [`ReceiptId`](tally_types::ReceiptId). The store is the
//! only shared mutable state in the service.
//!
//! # Storage Backends
//!
//! All backends implement the [`PointsStore`] trait:
//!
//! - [`InMemoryPointsStore`] -- `HashMap` behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Records are immutable once written; there is no update or delete.
//! 2. One map holds receipt and points together, so they cannot drift apart.
//! 3. Lookups share the lock; inserts take it exclusively.
//! 4. Two inserts never receive the same identifier.
//! 5. Nothing survives the process.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPointsStore;
pub use record::ScoreRecord;
pub use traits::PointsStore;
