use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the store API (a local Django dev server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Cookie set by the backend, echoed back on state-changing requests.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the backend expects the CSRF cookie value in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// Local store keys. `cart_key` is per-user; the session keys are global.
pub const USERNAME_KEY: &str = "username";
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Local store key holding the serialized cart for one user.
pub fn cart_key(username: &str) -> String {
    format!("cart_{}", username)
}

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay the payment simulation spends in `Processing` before settling.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);
/// Delay between a settled payment and the redirect back to the catalog.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("storefront-sdk")
    } else {
        PathBuf::from(".storefront-sdk")
    }
}
