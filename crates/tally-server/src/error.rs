use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tally_rules::ValidationError;
use thiserror::Error;

/// Body of every 400 response.
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";

/// Body of every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Why a submission or lookup was refused.
///
/// The variants carry detail for logs and tests. Clients only ever see the
/// fixed messages above.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("malformed receipt payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid receipt: {0}")]
    InvalidReceipt(#[from] ValidationError),

    #[error("no receipt found for id {0:?}")]
    NotFound(String),
}

impl IntakeError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Decode(_) | Self::InvalidReceipt(_) => INVALID_RECEIPT_MESSAGE,
            Self::NotFound(_) => NOT_FOUND_MESSAGE,
        };
        (self.status(), message).into_response()
    }
}

/// Errors from starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;
