//! Locally persisted auth session: plaintext username plus optional tokens.
//!
//! Presence of the stored username is the entire client-side auth gate.
//! Absence always reads as "not logged in", never as a loading state.

use crate::config;
use crate::error::{Result, StoreError};
use crate::models::Session;
use crate::storage::KeyValueStore;

/// Read/write access to the session keys of the local store.
pub struct SessionStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionStore<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// The logged-in username, if any. Synchronous read of the stored key.
    pub fn current_user(&self) -> Option<String> {
        self.store.get(config::USERNAME_KEY).ok().flatten()
    }

    /// The logged-in username, or `NotAuthorized` when no session is stored.
    ///
    /// This is the gate in front of cart and product-detail actions.
    pub fn require_user(&self) -> Result<String> {
        self.current_user()
            .ok_or_else(|| StoreError::NotAuthorized("Please log in first".to_string()))
    }

    /// Snapshot of everything the session holds.
    pub fn session(&self) -> Session {
        Session {
            username: self.current_user(),
            access_token: self.store.get(config::ACCESS_TOKEN_KEY).ok().flatten(),
            refresh_token: self.store.get(config::REFRESH_TOKEN_KEY).ok().flatten(),
        }
    }

    pub fn set_username(&self, username: &str) -> Result<()> {
        self.store.set(config::USERNAME_KEY, username)
    }

    /// Store whichever tokens the server returned. Absent tokens leave any
    /// previously stored value in place, matching the original's behavior.
    pub fn set_tokens(&self, access: Option<&str>, refresh: Option<&str>) -> Result<()> {
        if let Some(access) = access {
            self.store.set(config::ACCESS_TOKEN_KEY, access)?;
        }
        if let Some(refresh) = refresh {
            self.store.set(config::REFRESH_TOKEN_KEY, refresh)?;
        }
        Ok(())
    }

    /// Drop only the stored tokens, leaving the username in place.
    ///
    /// Admin logout uses this: it ends the admin's token session without
    /// logging the shopper out of the storefront.
    pub fn clear_tokens(&self) -> Result<()> {
        self.store.remove(config::ACCESS_TOKEN_KEY)?;
        self.store.remove(config::REFRESH_TOKEN_KEY)?;
        Ok(())
    }

    /// Clear all stored session fields.
    ///
    /// The cart is deliberately left alone: only a successful checkout clears
    /// it, so a user logging back in finds their cart where they left it.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(config::USERNAME_KEY)?;
        self.clear_tokens()
    }
}
