//! Client SDK for the my-store e-commerce API.
//!
//! Provides a typed client for the store's REST backend (catalog, user and
//! admin auth, product management) together with the client-side state the
//! storefront keeps: a per-user cart and a session, both persisted in a
//! local key-value store, plus a simulated checkout flow.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::StorefrontSdk;
//!
//! let sdk = StorefrontSdk::builder().build().unwrap();
//!
//! // Browse the catalog
//! let products = sdk.products().list().unwrap();
//!
//! // Log in and fill the cart
//! sdk.auth().login("ada@example.com", "hunter2").unwrap();
//! let cart = sdk.add_to_cart(&products[0]).unwrap();
//! println!("cart total: {}", cart.display_total());
//!
//! // Simulated payment: clears the cart and redirects to the catalog
//! sdk.checkout().unwrap().pay().unwrap();
//! ```

pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod cart;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

#[cfg(feature = "async")]
pub use async_client::AsyncStorefrontSdk;
pub use cart::CartStore;
pub use checkout::{CheckoutSimulator, CheckoutState, Redirect};
pub use client::ApiClient;
pub use error::{Result, StoreError};
pub use session::SessionStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use models::{Cart, Product};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
pub struct StorefrontSdkBuilder {
    base_url: String,
    storage_dir: Option<PathBuf>,
    store: Option<Box<dyn KeyValueStore + Send>>,
    timeout: Duration,
    processing_delay: Duration,
    redirect_delay: Duration,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            storage_dir: None,
            store: None,
            timeout: config::DEFAULT_TIMEOUT,
            processing_delay: config::DEFAULT_PROCESSING_DELAY,
            redirect_delay: config::DEFAULT_REDIRECT_DELAY,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Set the base URL of the store API. Defaults to the local dev server.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set a custom directory for the file-backed local store.
    ///
    /// If neither this nor [`store()`](Self::store) is set, the
    /// platform-appropriate default data directory is used.
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Inject a custom local store backend (e.g. [`MemoryStore`] in tests).
    /// Takes precedence over [`storage_dir()`](Self::storage_dir).
    pub fn store(mut self, store: Box<dyn KeyValueStore + Send>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the simulated payment's processing delay. Defaults to 2 seconds;
    /// tests typically set this to zero.
    pub fn processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Set the delay between a settled payment and the catalog redirect.
    /// Defaults to 2 seconds.
    pub fn redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Build the SDK, initializing the HTTP client and the local store.
    ///
    /// Performs no network traffic; requests are made lazily per operation.
    pub fn build(self) -> Result<StorefrontSdk> {
        let store: Box<dyn KeyValueStore + Send> = match self.store {
            Some(store) => store,
            None => {
                let dir = self.storage_dir.unwrap_or_else(config::default_storage_dir);
                Box::new(FileStore::new(dir)?)
            }
        };
        let client = ApiClient::new(&self.base_url, self.timeout)?;
        Ok(StorefrontSdk {
            client,
            store,
            processing_delay: self.processing_delay,
            redirect_delay: self.redirect_delay,
        })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the [`ApiClient`] and the local [`KeyValueStore`] and exposes
/// domain-specific interfaces as lightweight borrowing wrappers.
///
/// Created via [`StorefrontSdk::builder()`].
pub struct StorefrontSdk {
    client: ApiClient,
    store: Box<dyn KeyValueStore + Send>,
    processing_delay: Duration,
    redirect_delay: Duration,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    // -- Interface accessors -----------------------------------------------

    /// Access the product catalog interface.
    pub fn products(&self) -> api::ProductApi<'_> {
        api::ProductApi::new(&self.client)
    }

    /// Access the user auth interface (register, login, logout).
    pub fn auth(&self) -> api::AuthApi<'_> {
        api::AuthApi::new(&self.client, self.store.as_ref())
    }

    /// Access the admin interface (admin auth and product CRUD).
    pub fn admin(&self) -> api::AdminApi<'_> {
        api::AdminApi::new(&self.client, self.store.as_ref())
    }

    /// Access the locally stored session.
    pub fn session(&self) -> SessionStore<'_> {
        SessionStore::new(self.store.as_ref())
    }

    /// Access the cart store (load/save/add/remove/clear per user).
    pub fn cart(&self) -> CartStore<'_> {
        CartStore::new(self.store.as_ref())
    }

    /// Start a checkout for the logged-in user's cart.
    ///
    /// Fails with an authorization error when no session is stored.
    pub fn checkout(&self) -> Result<CheckoutSimulator<'_>> {
        let username = self.session().require_user()?;
        Ok(CheckoutSimulator::new(
            self.store.as_ref(),
            &username,
            self.processing_delay,
            self.redirect_delay,
        ))
    }

    // -- Gated conveniences ------------------------------------------------

    /// The logged-in username, if any.
    pub fn current_user(&self) -> Option<String> {
        self.session().current_user()
    }

    /// Add one unit of `product` to the logged-in user's cart.
    ///
    /// Requires a stored session; anonymous callers get an authorization
    /// error instead of a cart write.
    pub fn add_to_cart(&self, product: &Product) -> Result<Cart> {
        let username = self.session().require_user()?;
        self.cart().add(&username, product)
    }

    /// Fetch a product's detail view. Gated on a stored session, matching
    /// the storefront's login requirement for the detail page.
    pub fn view_product(&self, id: u64) -> Result<Product> {
        self.session().require_user()?;
        self.products().get(id)
    }

    // -- Escape hatches ----------------------------------------------------

    /// Return a reference to the underlying local store for advanced usage.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Return a reference to the underlying [`ApiClient`].
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorefrontSdk(base_url={}, user={})",
            self.client.base_url(),
            self.current_user().as_deref().unwrap_or("<anonymous>")
        )
    }
}
