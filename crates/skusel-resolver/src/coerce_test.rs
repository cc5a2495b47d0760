use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// coerce_id
// -----------------------------------------------------------------------

#[test]
fn coerce_id_accepts_string_and_number() {
    assert_eq!(coerce_id(Some(&json!("v-1"))).as_deref(), Some("v-1"));
    assert_eq!(coerce_id(Some(&json!(42))).as_deref(), Some("42"));
}

#[test]
fn coerce_id_rejects_blank_and_non_scalar() {
    assert!(coerce_id(Some(&json!("   "))).is_none());
    assert!(coerce_id(Some(&json!({"id": 1}))).is_none());
    assert!(coerce_id(None).is_none());
}

// -----------------------------------------------------------------------
// coerce_price
// -----------------------------------------------------------------------

#[test]
fn coerce_price_parses_string_and_number() {
    assert_eq!(coerce_price(Some(&json!("12.99"))), Some(Decimal::new(1299, 2)));
    assert_eq!(coerce_price(Some(&json!(110))), Some(Decimal::new(110, 0)));
    assert_eq!(coerce_price(Some(&json!(" 7.50 "))), Some(Decimal::new(750, 2)));
}

#[test]
fn coerce_price_accepts_zero() {
    assert_eq!(coerce_price(Some(&json!("0.00"))), Some(Decimal::ZERO));
}

#[test]
fn coerce_price_rejects_negative_and_garbage() {
    assert!(coerce_price(Some(&json!(-5))).is_none());
    assert!(coerce_price(Some(&json!("free"))).is_none());
    assert!(coerce_price(Some(&json!(""))).is_none());
    assert!(coerce_price(Some(&json!(true))).is_none());
    assert!(coerce_price(None).is_none());
}

#[test]
fn parse_decimal_handles_scientific_notation() {
    assert_eq!(parse_decimal("1.5e3"), Some(Decimal::new(1500, 0)));
}

// -----------------------------------------------------------------------
// coerce_quantity
// -----------------------------------------------------------------------

#[test]
fn coerce_quantity_accepts_whole_numbers() {
    assert_eq!(coerce_quantity(Some(&json!(5))), Some(5));
    assert_eq!(coerce_quantity(Some(&json!("12"))), Some(12));
    assert_eq!(coerce_quantity(Some(&json!(3.0))), Some(3));
}

#[test]
fn coerce_quantity_rejects_fractional_negative_and_overflow() {
    assert!(coerce_quantity(Some(&json!(3.5))).is_none());
    assert!(coerce_quantity(Some(&json!(-1))).is_none());
    assert!(coerce_quantity(Some(&json!(10_000_000_000_u64))).is_none());
    assert!(coerce_quantity(Some(&json!("lots"))).is_none());
    assert!(coerce_quantity(None).is_none());
}

// -----------------------------------------------------------------------
// decode_combination
// -----------------------------------------------------------------------

#[test]
fn decode_combination_from_object() {
    let decoded = decode_combination(&json!({"color": "Black", "storage": "256GB"})).unwrap();
    assert_eq!(decoded.combination.get("color"), Some("Black"));
    assert_eq!(decoded.combination.get("storage"), Some("256GB"));
    assert_eq!(decoded.dropped, 0);
}

#[test]
fn decode_combination_keeps_source_key_order() {
    let decoded = decode_combination(&json!("{\"storage\":\"256GB\",\"color\":\"Black\"}")).unwrap();
    assert_eq!(
        decoded.combination.attributes().collect::<Vec<_>>(),
        vec!["storage", "color"]
    );
}

#[test]
fn decode_combination_from_encoded_string() {
    let decoded = decode_combination(&json!("{\"color\":\"White\"}")).unwrap();
    assert_eq!(decoded.combination.get("color"), Some("White"));
}

#[test]
fn decode_combination_invalid_json_is_error() {
    let err = decode_combination(&json!("{invalid json")).unwrap_err();
    assert!(matches!(err, CombinationError::InvalidJson(_)));
}

#[test]
fn decode_combination_non_object_is_error() {
    let err = decode_combination(&json!("\"Black\"")).unwrap_err();
    assert!(matches!(err, CombinationError::NotAnObject("string")));
    let err = decode_combination(&json!(["Black"])).unwrap_err();
    assert!(matches!(err, CombinationError::NotAnObject("array")));
}

#[test]
fn decode_combination_empty_forms_are_empty() {
    for value in [json!(null), json!(""), json!("[]"), json!([]), json!({}), json!("{}")] {
        let decoded = decode_combination(&value).unwrap();
        assert!(decoded.combination.is_empty(), "expected empty for {value}");
    }
}

#[test]
fn decode_combination_stringifies_scalars_and_drops_nested() {
    let decoded = decode_combination(&json!({
        "storage": 256,
        "refurbished": false,
        "extras": ["case"],
        "meta": {"a": 1},
        "note": null,
    }))
    .unwrap();
    assert_eq!(decoded.combination.get("storage"), Some("256"));
    assert_eq!(decoded.combination.get("refurbished"), Some("false"));
    assert_eq!(decoded.combination.len(), 2);
    assert_eq!(decoded.dropped, 3);
}

#[test]
fn decode_combination_drops_blank_keys() {
    let decoded = decode_combination(&json!({"": "x", "color": "Red"})).unwrap();
    assert_eq!(decoded.combination.len(), 1);
    assert_eq!(decoded.dropped, 1);
}
