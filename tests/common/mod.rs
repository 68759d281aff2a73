//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides SDK constructors backed by an in-memory store (or a temp-dir
//! file store) with zero checkout delays, plus sample product builders.
//! No test here talks to a real backend.
#![allow(dead_code)]

use std::time::Duration;
use storefront_sdk::{MemoryStore, StorefrontSdk};
use storefront_sdk::models::Product;

/// An SDK over an in-memory store with zero-delay checkout.
///
/// The base URL points at a port nothing listens on, so any accidental
/// network call fails loudly instead of hitting a real service.
pub fn memory_sdk() -> StorefrontSdk {
    StorefrontSdk::builder()
        .base_url("http://localhost:1")
        .store(Box::new(MemoryStore::new()))
        .processing_delay(Duration::ZERO)
        .redirect_delay(Duration::ZERO)
        .build()
        .unwrap()
}

/// An SDK over a file store rooted in a fresh temp directory.
///
/// The caller must keep the `TempDir` alive for the duration of the test so
/// the storage directory is not deleted prematurely.
pub fn file_sdk() -> (StorefrontSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = StorefrontSdk::builder()
        .base_url("http://localhost:1")
        .storage_dir(tmp_dir.path())
        .processing_delay(Duration::ZERO)
        .redirect_delay(Duration::ZERO)
        .build()
        .unwrap();
    (sdk, tmp_dir)
}

/// Log a user in locally (session key only, no server involved).
pub fn login_as(sdk: &StorefrontSdk, username: &str) {
    sdk.session().set_username(username).unwrap();
}

pub fn product(id: u64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price,
        stock: 10,
        image: None,
        image_url: None,
    }
}
