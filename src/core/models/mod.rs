pub mod assignment;
pub mod bill;
pub mod split;

pub use assignment::{ItemClaim, PersonAssignment};
pub use bill::{Bill, BillItem, BillSummary, ExtractedBill, ExtractedItem};
pub use split::{ClaimedItem, PersonSplit, SplitResult};
