use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SplitbillError {
    /// Assignment references an item name with no match among bill items
    #[error("No bill item named `{0}`")]
    UnresolvedItem(String),

    /// Claimed quantity for an item exceeds its stated quantity
    #[error("Claimed {claimed} units of `{item}` but the bill lists only {available}")]
    Overclaim {
        item: String,
        claimed: u32,
        available: u32,
    },

    /// A priced item was not fully claimed; unclaimed units are an input error
    #[error("{unclaimed} units of `{item}` left unclaimed")]
    UnclaimedQuantity { item: String, unclaimed: u32 },

    /// No person has any claim, so there is nothing to divide
    #[error("No items claimed by any person")]
    EmptyAssignment,

    /// Stated summary values are inconsistent (e.g. negative total)
    #[error("Invalid bill summary: {0}")]
    InvalidSummary(String),

    /// Bill failed the parse-and-validate boundary
    #[error("Invalid bill: {0}")]
    InvalidBill(String),
}
