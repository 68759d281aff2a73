use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Success body of `POST /login/` and `POST /register/`.
///
/// The backend is loose about which fields it includes: registration may or
/// may not return tokens, login returns the username. Everything is optional
/// and absent fields default to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Success body of the admin login/register/probe endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminAuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

// ---------------------------------------------------------------------------
// Session — what the client persists locally after login
// ---------------------------------------------------------------------------

/// The locally held session: a plaintext username plus optional tokens.
///
/// Presence of `username` is the whole auth gate on the client side; there is
/// no local expiry or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}
