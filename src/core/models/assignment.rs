use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One person's claim on some units of a named bill item. The name is
/// matched case-insensitively against the bill; natural-language parsing
/// of "who ordered what" happens upstream, never here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemClaim {
    pub item: String,
    #[serde(default = "default_claim_quantity")]
    pub quantity: u32,
}

fn default_claim_quantity() -> u32 {
    1
}

/// A person and their ordered claims. Requests carry these as an array
/// so input order survives; the splitter uses that order as the stable
/// tie-break when reconciling rounding residue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonAssignment {
    pub person: String,
    #[serde(default)]
    pub claims: Vec<ItemClaim>,
}
