use rust_decimal_macros::dec;

use crate::core::errors::SplitbillError;
use crate::core::models::{Bill, ExtractedBill, ExtractedItem};

fn extracted_item(name: &str, unit_price: Option<&str>, quantity: Option<u32>) -> ExtractedItem {
    ExtractedItem {
        name: name.to_string(),
        unit_price: unit_price.map(|p| p.parse().unwrap()),
        quantity,
    }
}

#[test]
fn test_extraction_items_without_price_are_dropped() {
    let extracted = ExtractedBill {
        items: vec![
            extracted_item("Nasi Goreng", Some("25000"), Some(1)),
            extracted_item("Crossed Out Promo", None, Some(1)),
        ],
        summary: None,
        currency: "IDR".to_string(),
    };

    let bill = Bill::from_extraction(extracted).unwrap();
    assert_eq!(bill.items.len(), 1);
    assert_eq!(bill.items[0].name, "Nasi Goreng");
}

#[test]
fn test_extraction_with_only_unpriced_items_is_rejected() {
    let extracted = ExtractedBill {
        items: vec![extracted_item("Crossed Out Promo", None, None)],
        summary: None,
        currency: "IDR".to_string(),
    };

    let err = Bill::from_extraction(extracted).unwrap_err();
    assert!(matches!(err, SplitbillError::InvalidBill(_)));
}

#[test]
fn test_extraction_rejects_negative_price() {
    let extracted = ExtractedBill {
        items: vec![extracted_item("Oops", Some("-1"), Some(1))],
        summary: None,
        currency: "IDR".to_string(),
    };

    let err = Bill::from_extraction(extracted).unwrap_err();
    assert!(matches!(err, SplitbillError::InvalidBill(_)));
}

#[test]
fn test_extraction_rejects_zero_quantity_and_empty_names() {
    let zero_qty = ExtractedBill {
        items: vec![extracted_item("Tea", Some("10"), Some(0))],
        summary: None,
        currency: "IDR".to_string(),
    };
    assert!(matches!(
        Bill::from_extraction(zero_qty).unwrap_err(),
        SplitbillError::InvalidBill(_)
    ));

    let empty_name = ExtractedBill {
        items: vec![extracted_item("  ", Some("10"), Some(1))],
        summary: None,
        currency: "IDR".to_string(),
    };
    assert!(matches!(
        Bill::from_extraction(empty_name).unwrap_err(),
        SplitbillError::InvalidBill(_)
    ));
}

#[test]
fn test_extraction_rejects_missing_currency() {
    let extracted = ExtractedBill {
        items: vec![extracted_item("Tea", Some("10"), Some(1))],
        summary: None,
        currency: "  ".to_string(),
    };

    let err = Bill::from_extraction(extracted).unwrap_err();
    assert!(matches!(err, SplitbillError::InvalidBill(_)));
}

#[test]
fn test_extraction_normalizes_quantity_currency_and_precision() {
    let extracted = ExtractedBill {
        items: vec![extracted_item("Latte", Some("4.555"), None)],
        summary: None,
        currency: "idr".to_string(),
    };

    let bill = Bill::from_extraction(extracted).unwrap();
    assert_eq!(bill.currency, "IDR");
    assert_eq!(bill.items[0].quantity, 1);
    assert_eq!(bill.items[0].unit_price, dec!(4.56));
}

#[test]
fn test_extraction_request_deserializes_with_defaults() {
    let raw = r#"{
        "items": [
            {"name": "Nasi Goreng", "unit_price": 25000},
            {"name": "Es Teh Manis", "unit_price": 5000, "quantity": 2}
        ],
        "summary": {"vat_amount": 3850},
        "currency": "IDR"
    }"#;

    let extracted: ExtractedBill = serde_json::from_str(raw).unwrap();
    let bill = Bill::from_extraction(extracted).unwrap();

    assert_eq!(bill.items[0].quantity, 1);
    assert_eq!(bill.items[1].quantity, 2);
    assert_eq!(bill.summary.unwrap().vat_amount, Some(dec!(3850)));
}
