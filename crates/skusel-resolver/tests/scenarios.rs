//! End-to-end scenarios: raw JSON snapshots through normalization,
//! resolution and summarization, the way a product view consumes them.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde_json::json;

use skusel_core::{Catalog, Selection, StockPolicy, StockStatus};
use skusel_resolver::{
    attributes_of, can_update, headline, load_catalog, match_variant, normalize_catalog,
    parse_catalog_json, reachable_values, resolve, summarize, CatalogError, RawCatalog,
};

fn catalog_from(value: serde_json::Value) -> Catalog {
    let raw: RawCatalog = serde_json::from_value(value).expect("fixture should deserialize");
    normalize_catalog(raw)
}

/// Black (100, 5 units) and White (110, sold out), base price 90.
fn phone_catalog() -> Catalog {
    catalog_from(json!({
        "product_id": "phone",
        "base_price": 90,
        "variants": [
            {"id": 1, "combination": {"color": "Black"}, "price": 100, "quantity": 5},
            {"id": 2, "combination": {"color": "White"}, "price": 110, "quantity": 0}
        ]
    }))
}

fn tee_catalog() -> Catalog {
    catalog_from(json!({
        "product_id": "tee",
        "base_price": 20,
        "variants": [
            {"id": 1, "combination": {"color": "Black", "size": "M"}, "quantity": 3},
            {"id": 2, "combination": {"color": "Black", "size": "L"}, "quantity": 0},
            {"id": 3, "combination": {"color": "Red", "size": "M"}, "quantity": 2}
        ]
    }))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("skusel-{}-{name}", std::process::id()))
}

#[test]
fn summarize_two_variant_catalog() {
    let catalog = phone_catalog();
    let stats = summarize(&catalog.variants, catalog.base_price, &StockPolicy::default())
        .expect("catalog has variants");

    assert_eq!(stats.variant_count, 2);
    assert_eq!(stats.in_stock_count, 0);
    assert_eq!(stats.low_stock_count, 1);
    assert_eq!(stats.out_of_stock_count, 1);
    assert_eq!(stats.total_stock, 5);
    assert_eq!(stats.min_price, Decimal::new(100, 0));
    assert_eq!(stats.max_price, Decimal::new(110, 0));
    assert!(stats.has_price_range);
}

#[test]
fn sold_out_variant_matches_but_cannot_update() {
    let catalog = phone_catalog();
    let selection = Selection::new().with("color", "White");

    let matched = match_variant(&catalog.variants, &selection).expect("White should match");
    assert_eq!(matched.id, "2");
    assert!(!can_update(&catalog.variants, &selection));
}

#[test]
fn out_of_stock_size_is_not_reachable() {
    let catalog = tee_catalog();
    let selection = Selection::new().with("color", "Black");
    assert_eq!(
        reachable_values(&catalog.variants, "size", &selection),
        vec!["M"]
    );
}

#[test]
fn empty_catalog_falls_back_to_base_product() {
    let catalog = catalog_from(json!({
        "product_id": "mug",
        "product_price": "12.50",
        "product_quantity": 40,
        "product_variant": []
    }));

    assert!(attributes_of(&catalog.variants).is_empty());
    assert!(summarize(&catalog.variants, catalog.base_price, &StockPolicy::default()).is_none());

    let headline = headline(&catalog, &StockPolicy::default());
    assert!(!headline.from_variants);
    assert_eq!(headline.min_price, Decimal::new(1250, 2));
    assert_eq!(headline.total_stock, 40);
    assert_eq!(headline.stock_status, StockStatus::InStock);
}

#[test]
fn malformed_combination_still_counts_in_aggregate() {
    let catalog = catalog_from(json!({
        "product_id": "lamp",
        "base_price": 30,
        "variants": [
            {"id": "ok", "combination": "{\"color\":\"Brass\"}", "price": 45, "quantity": 2},
            {"id": "bad", "combination": "{invalid json", "quantity": 7}
        ]
    }));

    let bad = catalog.variant("bad").expect("bad variant kept");
    assert!(bad.combination.is_empty());

    let stats = summarize(&catalog.variants, catalog.base_price, &StockPolicy::default())
        .expect("catalog has variants");
    assert_eq!(stats.variant_count, 2);
    assert_eq!(stats.total_stock, 9);
    assert_eq!(stats.in_stock_count, 1);
    assert_eq!(stats.low_stock_count, 1);
    assert_eq!(stats.min_price, Decimal::new(30, 0));
    assert_eq!(stats.max_price, Decimal::new(45, 0));

    // The default variant is only reachable through an empty selection.
    assert_eq!(
        match_variant(&catalog.variants, &Selection::new()).map(|v| v.id.as_str()),
        Some("bad")
    );
}

#[test]
fn picking_options_step_by_step() {
    let catalog = tee_catalog();
    let policy = StockPolicy::default();
    let mut selection = Selection::new();

    selection.select("color", "Black");
    let view = resolve(&catalog, &selection, &policy);
    assert!(!view.can_update);
    assert_eq!(view.reachable_values("size"), vec!["M"]);

    selection.select("size", "M");
    let view = resolve(&catalog, &selection, &policy);
    assert!(view.can_update);
    assert_eq!(view.matched_variant.as_ref().map(|v| v.id.as_str()), Some("1"));

    // Switching color keeps the size pick; Red/M exists.
    selection.select("color", "Red");
    let view = resolve(&catalog, &selection, &policy);
    assert_eq!(view.matched_variant.as_ref().map(|v| v.id.as_str()), Some("3"));
    assert_eq!(view.reachable_values("color"), vec!["Black", "Red"]);
}

#[test]
fn view_serializes_for_the_ui() {
    let catalog = tee_catalog();
    let view = resolve(
        &catalog,
        &Selection::new().with("color", "Red").with("size", "M"),
        &StockPolicy::default(),
    );
    let json = serde_json::to_value(&view).expect("serialization failed");
    assert_eq!(json["can_update"], json!(true));
    assert_eq!(json["matched_variant"]["id"], json!("3"));
    assert_eq!(json["matched_variant"]["combination"], json!({"color": "Red", "size": "M"}));
}

#[test]
fn parse_catalog_json_rejects_malformed_snapshots() {
    for text in ["42", "{\"product_id\": ", "\"catalog\""] {
        let err = parse_catalog_json(text).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }), "expected Json error for {text}");
    }
}

#[test]
fn stray_variant_entries_do_not_discard_the_catalog() {
    let raw = parse_catalog_json(
        r#"{"variants": [{"id": 1, "combination": {"color": "Black"}, "quantity": 3}, null, "garbage"]}"#,
    )
    .expect("snapshot should parse");
    let catalog = normalize_catalog(raw);

    assert_eq!(catalog.variants.len(), 1);
    assert_eq!(catalog.variants[0].combination.get("color"), Some("Black"));
    assert!(can_update(
        &catalog.variants,
        &Selection::new().with("color", "Black")
    ));
}

#[test]
fn load_catalog_reads_json_file() {
    let path = temp_path("catalog.json");
    std::fs::write(
        &path,
        json!({
            "product_id": "file",
            "base_price": "5.00",
            "variants": [{"id": "a", "combination": {"size": "S"}, "quantity": 1}]
        })
        .to_string(),
    )
    .expect("write fixture");

    let catalog = load_catalog(&path).expect("catalog should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(catalog.product_id, "file");
    assert_eq!(catalog.variants.len(), 1);
}

#[test]
fn load_catalog_reads_yaml_file() {
    let path = temp_path("catalog.yaml");
    std::fs::write(
        &path,
        "product_id: yaml\nbase_price: 9.5\nvariants:\n  - id: a\n    combination: '{\"size\":\"S\"}'\n    quantity: 2\n",
    )
    .expect("write fixture");

    let catalog = load_catalog(&path).expect("catalog should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(catalog.product_id, "yaml");
    assert_eq!(catalog.base_price, Decimal::new(95, 1));
    assert_eq!(catalog.variants[0].combination.get("size"), Some("S"));
    assert_eq!(catalog.variants[0].quantity, 2);
}

#[test]
fn load_catalog_missing_file_is_io_error() {
    let err = load_catalog(&temp_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
