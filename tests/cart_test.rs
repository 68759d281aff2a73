//! Cart store and reducer behavior: line dedup, removal semantics, totals,
//! soft-fail loads and the persisted blob shape.

mod common;

use common::{file_sdk, memory_sdk, product};
use serde_json::Value;
use storefront_sdk::models::Cart;

#[test]
fn absent_cart_loads_empty() {
    let sdk = memory_sdk();
    let cart = sdk.cart().load("nobody");
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn malformed_cart_blob_loads_empty() {
    let sdk = memory_sdk();
    sdk.store().set("cart_mallory", "{definitely not json").unwrap();
    let cart = sdk.cart().load("mallory");
    assert!(cart.is_empty());
}

#[test]
fn adding_same_product_twice_merges_into_one_line() {
    let sdk = memory_sdk();
    let bolt = product(7, "Widget", 20.0);

    let cart = sdk.cart().add("ada", &bolt).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines[0].quantity, 1);
    assert_eq!(cart.lines[0].product.id, 7);

    let cart = sdk.cart().add("ada", &bolt).unwrap();
    assert_eq!(cart.len(), 1, "repeat add must not create a second line");
    assert_eq!(cart.lines[0].quantity, 2);
}

#[test]
fn remove_decrements_then_deletes() {
    let sdk = memory_sdk();
    let widget = product(1, "Widget", 10.0);
    sdk.cart().add("ada", &widget).unwrap();
    sdk.cart().add("ada", &widget).unwrap();

    let cart = sdk.cart().remove_one("ada", 0).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines[0].quantity, 1, "quantity > 1 only decrements");

    let cart = sdk.cart().remove_one("ada", 0).unwrap();
    assert!(cart.is_empty(), "quantity 1 deletes the line");
}

#[test]
fn remove_out_of_range_is_a_noop() {
    let sdk = memory_sdk();
    sdk.cart().add("ada", &product(1, "Widget", 10.0)).unwrap();
    let before = sdk.cart().load("ada");
    let after = sdk.cart().remove_one("ada", 5).unwrap();
    assert_eq!(before, after);
}

#[test]
fn total_is_sum_of_price_times_quantity() {
    // Worked example: [{id:1,price:10,qty:2},{id:2,price:5,qty:1}] -> 25.00
    let sdk = memory_sdk();
    let a = product(1, "A", 10.0);
    let b = product(2, "B", 5.0);
    sdk.cart().add("ada", &a).unwrap();
    sdk.cart().add("ada", &a).unwrap();
    let cart = sdk.cart().add("ada", &b).unwrap();

    assert_eq!(cart.total(), 25.0);
    assert_eq!(cart.display_total(), "$25.00");
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn total_holds_under_mixed_add_remove_sequences() {
    let sdk = memory_sdk();
    let a = product(1, "A", 3.5);
    let b = product(2, "B", 1.25);

    sdk.cart().add("ada", &a).unwrap();
    sdk.cart().add("ada", &b).unwrap();
    sdk.cart().add("ada", &a).unwrap();
    sdk.cart().remove_one("ada", 1).unwrap(); // drops B entirely
    let cart = sdk.cart().add("ada", &b).unwrap();

    let expected: f64 = cart.lines.iter().map(|l| l.product.price * f64::from(l.quantity)).sum();
    assert_eq!(cart.total(), expected);
    assert_eq!(cart.total(), 3.5 * 2.0 + 1.25);
}

#[test]
fn carts_are_isolated_per_user() {
    let sdk = memory_sdk();
    sdk.cart().add("ada", &product(1, "A", 10.0)).unwrap();
    assert!(sdk.cart().load("grace").is_empty());
    sdk.cart().clear("grace").unwrap();
    assert_eq!(sdk.cart().load("ada").len(), 1);
}

#[test]
fn blob_is_a_flat_array_of_product_objects_with_quantity() {
    let sdk = memory_sdk();
    sdk.cart().add("ada", &product(7, "Widget", 20.0)).unwrap();

    let raw = sdk.store().get("cart_ada").unwrap().unwrap();
    let blob: Value = serde_json::from_str(&raw).unwrap();
    let lines = blob.as_array().expect("cart serializes as a bare array");
    assert_eq!(lines.len(), 1);
    // Product fields are flattened alongside quantity, not nested.
    assert_eq!(lines[0]["id"], 7);
    assert_eq!(lines[0]["price"], 20.0);
    assert_eq!(lines[0]["quantity"], 1);

    // And it round-trips through the typed model.
    let reparsed: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(reparsed, sdk.cart().load("ada"));
}

#[test]
fn file_store_persists_across_sdk_instances() {
    let (sdk, tmp_dir) = file_sdk();
    sdk.cart().add("ada", &product(1, "A", 10.0)).unwrap();
    drop(sdk);

    let reopened = storefront_sdk::StorefrontSdk::builder()
        .base_url("http://localhost:1")
        .storage_dir(tmp_dir.path())
        .build()
        .unwrap();
    let cart = reopened.cart().load("ada");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines[0].product.name, "A");
}

#[test]
fn clear_removes_the_stored_key() {
    let sdk = memory_sdk();
    sdk.cart().add("ada", &product(1, "A", 10.0)).unwrap();
    sdk.cart().clear("ada").unwrap();
    assert!(sdk.store().get("cart_ada").unwrap().is_none());
    assert!(sdk.cart().load("ada").is_empty());
}
