use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use tracing::info;

use crate::api::models::{ApiError, SplitBillRequest};
use crate::core::models::{Bill, SplitResult};
use crate::core::splitter::BillSplitter;

// Define API routes
pub fn api_routes(splitter: Arc<BillSplitter>) -> Router {
    Router::new()
        .route("/splitbill/split", post(split_bill))
        .with_state(splitter)
}

/// Split a bill across the assigned persons.
#[utoipa::path(
    post,
    path = "/splitbill/split",
    request_body = SplitBillRequest,
    responses(
        (status = 200, description = "Split computed", body = SplitResult),
        (status = 400, description = "Invalid assignment", body = crate::api::models::ErrorResponse),
        (status = 422, description = "Invalid bill or summary", body = crate::api::models::ErrorResponse)
    )
)]
pub async fn split_bill(
    State(splitter): State<Arc<BillSplitter>>,
    Json(request): Json<SplitBillRequest>,
) -> Result<Json<SplitResult>, ApiError> {
    let bill = Bill::from_extraction(request.bill)?;
    let result = splitter.split(&bill, &request.assignments)?;
    info!(
        "Split {} {} across {} persons",
        result.total_bill,
        result.currency,
        result.split_details.len()
    );
    Ok(Json(result))
}
