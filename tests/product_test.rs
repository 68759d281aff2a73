//! Wire-format tolerance for product payloads: the backend serializes the
//! decimal price as a JSON string, while stored cart blobs carry numbers.

use serde_json::json;
use storefront_sdk::models::{Cart, Product, ProductInfo};

#[test]
fn price_accepts_a_decimal_string() {
    let product: Product = serde_json::from_value(json!({
        "id": 1,
        "name": "Widget",
        "description": "A fine widget",
        "price": "19.99",
        "stock": 3,
        "image": null,
        "image_url": null,
    }))
    .unwrap();
    assert_eq!(product.price, 19.99);
    assert_eq!(product.display_price(), "$19.99");
}

#[test]
fn price_accepts_a_plain_number() {
    let product: Product = serde_json::from_value(json!({
        "id": 1,
        "name": "Widget",
        "price": 7,
        "stock": 3,
    }))
    .unwrap();
    assert_eq!(product.price, 7.0);
}

#[test]
fn non_numeric_price_string_is_rejected() {
    let result: Result<Product, _> = serde_json::from_value(json!({
        "id": 1,
        "name": "Widget",
        "price": "free",
        "stock": 3,
    }));
    assert!(result.is_err());
}

#[test]
fn cart_blob_with_string_prices_loads_and_totals() {
    let cart: Cart = serde_json::from_value(json!([
        {"id": 1, "name": "A", "price": "10.00", "stock": 5, "quantity": 2},
        {"id": 2, "name": "B", "price": 5.0, "stock": 5, "quantity": 1},
    ]))
    .unwrap();
    assert_eq!(cart.total(), 25.0);
}

#[test]
fn product_info_max_price_accepts_string_and_null() {
    let info: ProductInfo = serde_json::from_value(json!({
        "products": [],
        "count": 0,
        "max_price": "42.50",
    }))
    .unwrap();
    assert_eq!(info.max_price, Some(42.5));

    let info: ProductInfo = serde_json::from_value(json!({
        "products": [],
        "count": 0,
        "max_price": null,
    }))
    .unwrap();
    assert_eq!(info.max_price, None);
}
