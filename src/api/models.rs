use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitbillError;
use crate::core::models::{ExtractedBill, PersonAssignment};

/// Body of `POST /splitbill/split`: extraction output plus resolved
/// per-person claims. Assignments are an array so their order is kept.
#[derive(Deserialize, ToSchema)]
pub struct SplitBillRequest {
    pub bill: ExtractedBill,
    pub assignments: Vec<PersonAssignment>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitbillError to implement IntoResponse
pub struct ApiError(pub SplitbillError);

impl From<SplitbillError> for ApiError {
    fn from(err: SplitbillError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            SplitbillError::UnresolvedItem(_)
            | SplitbillError::Overclaim { .. }
            | SplitbillError::UnclaimedQuantity { .. }
            | SplitbillError::EmptyAssignment => StatusCode::BAD_REQUEST,
            SplitbillError::InvalidSummary(_) | SplitbillError::InvalidBill(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
