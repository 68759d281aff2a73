//! Per-user cart persistence and mutation.
//!
//! The cart is a flat array of product snapshots with quantities, stored as
//! one serialized blob under `cart_{username}`. Every mutation rewrites the
//! whole blob; there is no versioning and no cross-writer protection (last
//! write wins).

use crate::config;
use crate::error::Result;
use crate::models::{Cart, Product};
use crate::storage::KeyValueStore;

/// Cart operations against the local store.
pub struct CartStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CartStore<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load `username`'s cart.
    ///
    /// An absent key or a malformed blob both yield an empty cart; corruption
    /// is logged and the bad blob is left to be overwritten by the next save.
    pub fn load(&self, username: &str) -> Cart {
        let key = config::cart_key(username);
        match self.store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    log::warn!("malformed cart blob under {}: {} -- treating as empty", key, e);
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                log::warn!("failed to read {}: {} -- treating as empty", key, e);
                Cart::new()
            }
        }
    }

    /// Serialize and overwrite `username`'s cart in one write.
    pub fn save(&self, username: &str, cart: &Cart) -> Result<()> {
        let raw = serde_json::to_string(cart)?;
        self.store.set(&config::cart_key(username), &raw)
    }

    /// Add one unit of `product` to `username`'s cart and persist.
    ///
    /// A line already holding `product.id` has its quantity incremented;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add(&self, username: &str, product: &Product) -> Result<Cart> {
        let mut cart = self.load(username);
        cart.add(product);
        self.save(username, &cart)?;
        Ok(cart)
    }

    /// Remove one unit from the line at `index` and persist.
    ///
    /// Quantity > 1 decrements; quantity 1 deletes the line. An out-of-range
    /// index leaves the cart unchanged.
    pub fn remove_one(&self, username: &str, index: usize) -> Result<Cart> {
        let mut cart = self.load(username);
        cart.remove_one(index);
        self.save(username, &cart)?;
        Ok(cart)
    }

    /// Delete `username`'s stored cart key entirely.
    pub fn clear(&self, username: &str) -> Result<()> {
        self.store.remove(&config::cart_key(username))
    }
}
