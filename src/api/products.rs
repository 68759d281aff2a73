//! Product catalog reads.

use crate::client::ApiClient;
use crate::error::{Result, StoreError};
use crate::models::{Product, ProductInfo};
use serde_json::Value;

/// Read-only catalog interface backed by the `/products/` endpoints.
pub struct ProductApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the whole catalog. No pagination, filtering or sorting is
    /// requested; when the backend's limit/offset paginator wraps the list in
    /// a `{"results": [...]}` envelope anyway, the envelope is unwrapped.
    pub fn list(&self) -> Result<Vec<Product>> {
        let body: Value = self.client.get_json("products/")?;
        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(StoreError::InvalidArgument(
                        "unexpected product list shape".to_string(),
                    ))
                }
            },
            _ => {
                return Err(StoreError::InvalidArgument(
                    "unexpected product list shape".to_string(),
                ))
            }
        };
        let products = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Product>, _>>()?;
        Ok(products)
    }

    /// Fetch a single product by id. A missing id maps to `NotFound`.
    pub fn get(&self, id: u64) -> Result<Product> {
        self.client.get_json(&format!("products/{}", id))
    }

    /// Fetch the catalog summary (`/products/info`): full list, count and
    /// maximum price.
    pub fn info(&self) -> Result<ProductInfo> {
        self.client.get_json("products/info")
    }
}
