//! Remote API interfaces.
//!
//! Each module provides an interface struct that borrows the shared
//! [`ApiClient`](crate::client::ApiClient) (plus the local store where a flow
//! persists session state) and exposes methods returning `Result<T>` with
//! typed payloads.

pub mod admin;
pub mod auth;
pub mod products;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use products::ProductApi;
