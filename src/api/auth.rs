//! User registration and login against `/register/` and `/login/`.

use crate::client::ApiClient;
use crate::error::{Result, StoreError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Session};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// Auth flow for regular store users.
///
/// On success the resulting session fields (username, tokens when the server
/// returns them) are written to the local store; failures leave local state
/// untouched.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
    session: SessionStore<'a>,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient, store: &'a dyn KeyValueStore) -> Self {
        Self {
            client,
            session: SessionStore::new(store),
        }
    }

    /// Create a new account. Field errors from the server come back as one
    /// flattened `Api` message; empty fields are rejected before submission.
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(StoreError::Validation("All fields are required.".to_string()));
        }
        let req = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.client.post_json("register/", &req)?;
        self.session
            .set_tokens(resp.access.as_deref(), resp.refresh.as_deref())?;
        Ok(resp)
    }

    /// Log in with email and password. The returned username is persisted
    /// locally and gates cart and product-detail actions from then on.
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(StoreError::Validation("All fields are required.".to_string()));
        }
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.client.post_json("login/", &req)?;
        if let Some(username) = resp.username.as_deref() {
            self.session.set_username(username)?;
        }
        self.session
            .set_tokens(resp.access.as_deref(), resp.refresh.as_deref())?;
        Ok(self.session.session())
    }

    /// Clear the stored session fields. Purely local; the cart stays put.
    pub fn logout(&self) -> Result<()> {
        self.session.logout()
    }
}
