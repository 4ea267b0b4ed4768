use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitbillError;

/// A single priced line on the bill. `unit_price` is the per-unit price,
/// never the line total (a bill line "2 Nasi Goreng 110000" arrives here
/// as unit_price 55000, quantity 2).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BillItem {
    pub name: String,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl BillItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Values the bill itself states. When a field is present it is
/// authoritative and is never recomputed from the items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BillSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub subtotal: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub vat_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub service_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub discount_amount: Option<Decimal>,
    #[serde(default)]
    pub discount_is_percentage: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub total: Option<Decimal>,
}

/// A validated bill, safe to hand to the splitter.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Bill {
    pub items: Vec<BillItem>,
    pub summary: Option<BillSummary>,
    pub currency: String,
}

/// Item shape as returned by the external extraction service. The
/// extractor may omit a price (e.g. a crossed-out marketing price it
/// refused to read) or a quantity.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ExtractedItem {
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Untrusted bill shape from the extraction service, prior to validation.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ExtractedBill {
    pub items: Vec<ExtractedItem>,
    #[serde(default)]
    pub summary: Option<BillSummary>,
    pub currency: String,
}

impl Bill {
    /// Parse-and-validate boundary for extraction output. Items without a
    /// price are dropped here; everything else malformed is rejected so
    /// the splitter never sees unchecked external data.
    pub fn from_extraction(extracted: ExtractedBill) -> Result<Self, SplitbillError> {
        let currency = extracted.currency.trim().to_uppercase();
        if currency.is_empty() {
            return Err(SplitbillError::InvalidBill("missing currency".to_string()));
        }

        let mut items = Vec::with_capacity(extracted.items.len());
        for raw in extracted.items {
            let name = raw.name.trim().to_string();
            if name.is_empty() {
                return Err(SplitbillError::InvalidBill("item with empty name".to_string()));
            }
            let Some(unit_price) = raw.unit_price else {
                warn!("Dropping item `{}`: no price extracted", name);
                continue;
            };
            if unit_price.is_sign_negative() {
                return Err(SplitbillError::InvalidBill(format!(
                    "negative price for item `{}`",
                    name
                )));
            }
            let quantity = raw.quantity.unwrap_or(1);
            if quantity == 0 {
                return Err(SplitbillError::InvalidBill(format!(
                    "zero quantity for item `{}`",
                    name
                )));
            }
            items.push(BillItem {
                name,
                unit_price: unit_price
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                quantity,
            });
        }

        if items.is_empty() {
            return Err(SplitbillError::InvalidBill("bill has no priced items".to_string()));
        }

        let bill = Bill {
            items,
            summary: extracted.summary,
            currency,
        };
        bill.validate_summary()?;
        Ok(bill)
    }

    /// Checks the stated summary for internally impossible values. Cross
    /// checks against claimed totals happen in the splitter.
    pub fn validate_summary(&self) -> Result<(), SplitbillError> {
        let Some(summary) = &self.summary else {
            return Ok(());
        };

        for (field, value) in [
            ("subtotal", summary.subtotal),
            ("vat_amount", summary.vat_amount),
            ("service_amount", summary.service_amount),
            ("discount_amount", summary.discount_amount),
            ("total", summary.total),
        ] {
            if let Some(v) = value {
                if v.is_sign_negative() {
                    return Err(SplitbillError::InvalidSummary(format!(
                        "negative {}: {}",
                        field, v
                    )));
                }
            }
        }

        if summary.discount_is_percentage {
            match summary.discount_amount {
                Some(pct) if pct > Decimal::from(100) => {
                    return Err(SplitbillError::InvalidSummary(format!(
                        "percentage discount above 100: {}",
                        pct
                    )));
                }
                None => {
                    return Err(SplitbillError::InvalidSummary(
                        "discount marked as percentage but no amount stated".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}
