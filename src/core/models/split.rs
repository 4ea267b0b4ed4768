use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An item line inside one person's breakdown: claimed name as printed
/// on the bill, unit price, and how many units this person claimed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimedItem {
    pub item: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: u32,
}

/// Per-person monetary breakdown.
///
/// `final_total = individual_total + vat_share + other_share - discount_share`,
/// every field rounded to 2 decimal places.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonSplit {
    pub person: String,
    pub items: Vec<ClaimedItem>,
    #[schema(value_type = f64)]
    pub individual_total: Decimal,
    #[schema(value_type = f64)]
    pub vat_share: Decimal,
    #[schema(value_type = f64)]
    pub other_share: Decimal,
    #[schema(value_type = f64)]
    pub discount_share: Decimal,
    #[schema(value_type = f64)]
    pub final_total: Decimal,
}

/// The full split. Invariant:
/// `sum(final_total) == total_bill == subtotal + total_vat + total_other - total_discount`,
/// exact to the cent after rounding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SplitResult {
    pub split_details: Vec<PersonSplit>,
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
    #[schema(value_type = f64)]
    pub total_bill: Decimal,
    #[schema(value_type = f64)]
    pub total_vat: Decimal,
    #[schema(value_type = f64)]
    pub total_other: Decimal,
    #[schema(value_type = f64)]
    pub total_discount: Decimal,
    pub currency: String,
}

impl SplitResult {
    pub fn person(&self, name: &str) -> Option<&PersonSplit> {
        self.split_details.iter().find(|p| p.person == name)
    }
}
