use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, SplitBillRequest},
    core::models::{
        Bill, BillItem, BillSummary, ClaimedItem, ExtractedBill, ExtractedItem, ItemClaim,
        PersonAssignment, PersonSplit, SplitResult,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::split_bill),
    components(schemas(
        SplitBillRequest,
        ErrorResponse,
        ExtractedBill,
        ExtractedItem,
        Bill,
        BillItem,
        BillSummary,
        ItemClaim,
        PersonAssignment,
        PersonSplit,
        ClaimedItem,
        SplitResult
    )),
    info(
        title = "Splitbill API",
        description = "API for splitting extracted restaurant bills across persons",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
