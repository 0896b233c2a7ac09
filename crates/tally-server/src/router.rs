use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::service::ReceiptService;

/// Build the axum router with all receipt endpoints.
pub fn build_router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/receipts/process", post(handler::process_receipt))
        .route("/receipts/:id/points", get(handler::get_points))
        .route("/v1/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
