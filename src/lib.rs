pub mod api;
pub mod config;
pub mod constants;
pub mod core;

pub use crate::core::errors::SplitbillError;
pub use crate::core::models::{Bill, BillItem, BillSummary, PersonAssignment, SplitResult};
pub use crate::core::splitter::{BillSplitter, SplitConfig};

#[cfg(test)]
mod tests;
