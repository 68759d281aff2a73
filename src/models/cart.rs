use crate::models::product::Product;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CartLine — product snapshot plus quantity
// ---------------------------------------------------------------------------

/// One line of a cart: a snapshot of the product at add time plus a quantity.
///
/// Serializes to the product's fields with a `quantity` field alongside,
/// matching the flat array-of-objects blob the original stored per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self { product, quantity: 1 }
    }

    /// Line subtotal (price × quantity), unrounded.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

// ---------------------------------------------------------------------------
// Cart — ordered sequence of lines, at most one line per product id
// ---------------------------------------------------------------------------

/// A user's cart. Serialized as a bare JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines (the cart badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ price × quantity over all lines. Computed fresh on every call;
    /// rounding is left to display time.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total formatted for display, rounded to 2 decimals.
    pub fn display_total(&self) -> String {
        format!("${:.2}", self.total())
    }

    /// Index of the line holding `product_id`, if any.
    pub fn position(&self, product_id: u64) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }

    /// Add one unit of `product`: bump the existing line's quantity, or
    /// append a fresh line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(i) => self.lines[i].quantity += 1,
            None => self.lines.push(CartLine::new(product.clone())),
        }
    }

    /// Remove one unit from the line at `index`: decrement when quantity > 1,
    /// delete the line otherwise. Out-of-range indexes are a no-op.
    pub fn remove_one(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }
}
