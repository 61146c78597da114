use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::service::IntakeService;

/// Build the axum router with all Tally endpoints.
pub fn build_router(service: IntakeService, config: &ServerConfig) -> Router {
    Router::new()
        .route("/receipts/process", post(handler::process_receipt))
        .route("/receipts/:id/points", get(handler::get_points))
        .route("/health", get(handler::health_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
