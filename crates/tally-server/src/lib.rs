//! HTTP intake service for Tally.
//!
//! Accepts receipts over HTTP, scores them, and serves the stored points:
//!
//! - `POST /receipts/process` -- JSON receipt in, `{"id": ...}` out
//! - `GET /receipts/:id/points` -- `{"points": ...}` for an issued id
//! - `GET /health` -- liveness and version
//!
//! All behavior lives in [`IntakeService`]; the handlers only decode,
//! delegate and encode.

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod service;

pub use config::ServerConfig;
pub use dto::{HealthResponse, PointsResponse, ProcessResponse};
pub use error::{IntakeError, ServerError, ServerResult, INVALID_RECEIPT_MESSAGE, NOT_FOUND_MESSAGE};
pub use server::TallyServer;
pub use service::IntakeService;
