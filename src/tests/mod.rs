mod bill_tests;

use rust_decimal::Decimal;

use crate::core::models::{Bill, BillItem, BillSummary, ItemClaim, PersonAssignment};
use crate::core::splitter::{BillSplitter, SplitConfig};

pub fn create_test_splitter() -> BillSplitter {
    BillSplitter::new(SplitConfig::default())
}

pub fn item(name: &str, unit_price: Decimal, quantity: u32) -> BillItem {
    BillItem {
        name: name.to_string(),
        unit_price,
        quantity,
    }
}

pub fn bill(items: Vec<BillItem>, summary: Option<BillSummary>, currency: &str) -> Bill {
    Bill {
        items,
        summary,
        currency: currency.to_string(),
    }
}

pub fn assign(person: &str, claims: &[(&str, u32)]) -> PersonAssignment {
    PersonAssignment {
        person: person.to_string(),
        claims: claims
            .iter()
            .map(|(item, quantity)| ItemClaim {
                item: item.to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}
