use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Product — catalog item as served by the API (read-only to the client)
// ---------------------------------------------------------------------------

/// A catalog product. Owned entirely by the remote API; the client only keeps
/// transient copies (and cart snapshots) of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Price formatted for display. Rounding happens only here, never in
    /// stored or computed values.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// ---------------------------------------------------------------------------
// ProductInfo — the /products/info aggregate endpoint
// ---------------------------------------------------------------------------

/// Catalog summary returned by `GET /products/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInfo {
    pub products: Vec<Product>,
    pub count: u64,
    #[serde(default, deserialize_with = "opt_price_from_number_or_string")]
    pub max_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// Price deserialization
// ---------------------------------------------------------------------------

/// Accept a price as either a JSON number or a decimal string.
///
/// The backend serializes its decimal price field as a string (`"19.99"`),
/// while locally stored cart blobs carry plain numbers.
fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct PriceVisitor;

    impl de::Visitor<'_> for PriceVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}

fn opt_price_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptPriceVisitor;

    impl<'de> de::Visitor<'de> for OptPriceVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            price_from_number_or_string(d).map(Some)
        }
    }

    deserializer.deserialize_option(OptPriceVisitor)
}

// ---------------------------------------------------------------------------
// ProductForm — admin create/update submission
// ---------------------------------------------------------------------------

/// Fields for an admin product create or update.
///
/// All text fields are required; `image` is required only when creating (an
/// update keeps the product's existing image if no new file is given).
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Decimal price as entered, e.g. `"19.99"`. Sent verbatim as a form field.
    pub price: String,
    /// Stock count as entered, e.g. `"12"`.
    pub stock: String,
    /// Path to an image file to upload.
    pub image: Option<std::path::PathBuf>,
}

impl ProductForm {
    pub fn new(name: &str, description: &str, price: &str, stock: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            image: None,
        }
    }

    pub fn image<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.image = Some(path.as_ref().to_path_buf());
        self
    }
}
