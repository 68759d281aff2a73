//! Async wrapper around [`StorefrontSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! underlying operations are short blocking HTTP calls and small file reads,
//! making this approach efficient.
//!
//! # Example
//!
//! ```no_run
//! # use storefront_sdk::AsyncStorefrontSdk;
//! # async fn example() -> storefront_sdk::Result<()> {
//! let sdk = AsyncStorefrontSdk::builder().build().await?;
//!
//! // Run any sync SDK method via closure
//! let products = sdk.run(|s| s.products().list()).await?;
//!
//! // Convenience method for the catalog list
//! let same = sdk.list_products().await?;
//! assert_eq!(products.len(), same.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, StoreError};
use crate::models::{Product, Session};
use crate::storage::KeyValueStore;
use crate::StorefrontSdk;

// ---------------------------------------------------------------------------
// AsyncStorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefrontSdk`] instance.
pub struct AsyncStorefrontSdkBuilder {
    base_url: String,
    storage_dir: Option<PathBuf>,
    store: Option<Box<dyn KeyValueStore + Send>>,
    timeout: Duration,
    processing_delay: Duration,
    redirect_delay: Duration,
}

impl Default for AsyncStorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            storage_dir: None,
            store: None,
            timeout: crate::config::DEFAULT_TIMEOUT,
            processing_delay: crate::config::DEFAULT_PROCESSING_DELAY,
            redirect_delay: crate::config::DEFAULT_REDIRECT_DELAY,
        }
    }
}

impl AsyncStorefrontSdkBuilder {
    /// Set the base URL of the store API.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set a custom directory for the file-backed local store.
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Inject a custom local store backend.
    pub fn store(mut self, store: Box<dyn KeyValueStore + Send>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the simulated payment's processing delay.
    pub fn processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Set the delay between a settled payment and the catalog redirect.
    pub fn redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Build the async SDK. Initialization runs on the blocking thread pool
    /// so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncStorefrontSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StorefrontSdk::builder()
                .base_url(&self.base_url)
                .timeout(self.timeout)
                .processing_delay(self.processing_delay)
                .redirect_delay(self.redirect_delay);
            if let Some(dir) = self.storage_dir {
                builder = builder.storage_dir(dir);
            }
            if let Some(store) = self.store {
                builder = builder.store(store);
            }
            let sdk = builder.build()?;
            Ok(AsyncStorefrontSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| StoreError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefrontSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`StorefrontSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`StorefrontSdk`] is
/// protected by a [`Mutex`] since the local store uses interior mutability.
///
/// # Usage
///
/// Use [`run()`](Self::run) to execute any sync SDK method:
///
/// ```no_run
/// # use storefront_sdk::AsyncStorefrontSdk;
/// # async fn example() -> storefront_sdk::Result<()> {
/// let sdk = AsyncStorefrontSdk::builder().build().await?;
/// let info = sdk.run(|s| s.products().info()).await?;
/// # Ok(())
/// # }
/// ```
pub struct AsyncStorefrontSdk {
    inner: Arc<Mutex<StorefrontSdk>>,
}

impl AsyncStorefrontSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStorefrontSdkBuilder {
        AsyncStorefrontSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&StorefrontSdk` reference and should return
    /// a `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| StoreError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StoreError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the whole catalog asynchronously.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.run(|s| s.products().list()).await
    }

    /// Log in asynchronously and persist the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let email = email.to_string();
        let password = password.to_string();
        self.run(move |s| s.auth().login(&email, &password)).await
    }

    /// Run the full simulated checkout for the logged-in user.
    pub async fn pay(&self) -> Result<crate::Redirect> {
        self.run(|s| s.checkout()?.pay()).await
    }
}
