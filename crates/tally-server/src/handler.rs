use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use tally_types::Receipt;

use crate::error::{ServerError, ServerResult};
use crate::service::ReceiptService;

/// Body of a successful `POST /receipts/process` response.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Body of a successful `GET /receipts/{id}/points` response.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Health probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Score a receipt and return its content-derived identifier.
///
/// Any body that does not deserialize into a [`Receipt`] is a client
/// error; the core never sees it.
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    receipt: Result<Json<Receipt>, JsonRejection>,
) -> ServerResult<Json<ProcessResponse>> {
    let Json(receipt) = receipt.map_err(|_| ServerError::MalformedReceipt)?;
    let id = service.submit(&receipt)?;
    Ok(Json(ProcessResponse { id: id.to_hex() }))
}

/// Return the stored point total for an identifier token.
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> ServerResult<Json<PointsResponse>> {
    let points = service.lookup(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
