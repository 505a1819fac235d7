//! Schema decoding against full sample documents.

mod common;

use serde_json::Value;
use storefront_cli::decode::{decode, decode_document};
use storefront_cli::models::{AvailabilityRecord, CatalogEntry, Document, ProductDetail, Schema};

fn reencode<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

// ---------------------------------------------------------------------------
// Round trips: every field of a fully populated document survives
// ---------------------------------------------------------------------------

#[test]
fn catalog_round_trips() {
    let decoded = decode::<Vec<CatalogEntry>>(common::CATALOG_JSON.as_bytes());

    assert!(decoded.diagnostic.is_none());
    let original: Value = serde_json::from_str(common::CATALOG_JSON).unwrap();
    assert_eq!(reencode(&decoded.value), original);
}

#[test]
fn availability_round_trips() {
    let decoded = decode::<AvailabilityRecord>(common::AVAILABILITY_JSON.as_bytes());

    assert!(decoded.diagnostic.is_none());
    let original: Value = serde_json::from_str(common::AVAILABILITY_JSON).unwrap();
    assert_eq!(reencode(&decoded.value), original);
}

#[test]
fn product_detail_round_trips() {
    let decoded = decode::<ProductDetail>(common::PRODUCT_JSON.as_bytes());

    assert!(decoded.diagnostic.is_none());
    let original: Value = serde_json::from_str(common::PRODUCT_JSON).unwrap();
    assert_eq!(reencode(&decoded.value), original);
}

#[test]
fn unknown_fields_are_dropped_never_added() {
    let mut original: Value = serde_json::from_str(common::AVAILABILITY_JSON).unwrap();
    original["warehouse"] = Value::from("EU-1");
    let body = serde_json::to_vec(&original).unwrap();

    let decoded = decode::<AvailabilityRecord>(&body);

    let out = reencode(&decoded.value);
    assert!(out.get("warehouse").is_none());
    original.as_object_mut().unwrap().remove("warehouse");
    assert_eq!(out, original);
}

// ---------------------------------------------------------------------------
// Field mapping spot checks
// ---------------------------------------------------------------------------

#[test]
fn catalog_keeps_server_order_and_fields() {
    let entries = decode::<Vec<CatalogEntry>>(common::CATALOG_JSON.as_bytes()).value;

    let ids: Vec<_> = entries.iter().map(|e| e.product_id.as_str()).collect();
    assert_eq!(ids, ["FY4567", "GW1934"]);
    assert_eq!(entries[0].callout_messages, ["LIMIT 1 PER CUSTOMER", "FINAL SALE"]);
    assert_eq!(entries[0].image.link, "https://images.example.com/FY4567.png");
    assert_eq!(entries[0].group_item_sort_id, 2);
    assert!(entries[0].is_waiting_room);
    assert!(entries[1].pre_orderable);
}

#[test]
fn product_detail_nested_fields() {
    let product = decode::<ProductDetail>(common::PRODUCT_JSON.as_bytes()).value;

    assert_eq!(product.meta_data.site_name, "YEEZY SUPPLY");
    assert_eq!(product.view_list[1].kind, "detail");
    assert_eq!(product.pricing_information.standard_price_no_vat, 6667);
    assert_eq!(product.attribute_list.size_fit_bar.selected_marker_index, 2);
    assert_eq!(product.attribute_list.size_fit_bar.marker_count, 5);
    assert_eq!(product.attribute_list.product_types, ["Sneakers"]);
    assert!(!product.attribute_list.preview_to.is_zero());
    assert_eq!(product.product_description.usps.len(), 2);
    assert_eq!(product.product_link_list.len(), 1);
}

#[test]
fn bad_timestamp_does_not_spoil_the_document() {
    let body = common::PRODUCT_JSON.replace(
        r#""preview_to": "2022-08-18T14:00:00Z""#,
        r#""preview_to": "soon""#,
    );

    let decoded = decode::<ProductDetail>(body.as_bytes());

    assert!(decoded.diagnostic.is_none());
    assert!(decoded.value.attribute_list.preview_to.is_zero());
    assert_eq!(decoded.value.attribute_list.max_order_quantity, 1);
}

#[test]
fn decode_document_selects_the_variant() {
    let report = decode_document(Schema::Catalog, common::CATALOG_JSON.as_bytes());

    match &report.document {
        Document::Catalog(entries) => assert_eq!(entries.len(), 2),
        other => panic!("expected a catalog, got {other:?}"),
    }
    let rendered = report.render().unwrap();
    assert!(rendered.starts_with("[\n  {\n    \"price\": 220,"), "{rendered}");
}
