//! Admin auth and product management.
//!
//! Admin access is asserted by the server (`is_admin` in the response and a
//! session cookie on the shared jar), never by a locally held role. Product
//! create/update are multipart submissions; the image file is required when
//! creating and optional when updating.

use crate::client::ApiClient;
use crate::error::{Result, StoreError};
use crate::models::{AdminAuthResponse, LoginRequest, Product, ProductForm, RegisterRequest};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use reqwest::blocking::multipart::Form;

/// Admin flow: login/register, authorization probe, product CRUD.
pub struct AdminApi<'a> {
    client: &'a ApiClient,
    session: SessionStore<'a>,
}

impl<'a> AdminApi<'a> {
    pub fn new(client: &'a ApiClient, store: &'a dyn KeyValueStore) -> Self {
        Self {
            client,
            session: SessionStore::new(store),
        }
    }

    // -- Auth --------------------------------------------------------------

    /// Log in as an admin. Credential failures and non-admin accounts both
    /// surface as `NotAuthorized`; success leaves the Django session cookie
    /// on the shared jar for later CRUD calls.
    pub fn login(&self, email: &str, password: &str) -> Result<AdminAuthResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AdminAuthResponse = self
            .client
            .post_json("admin-login/", &req)
            .map_err(auth_rejection)?;
        if !resp.is_admin {
            return Err(StoreError::NotAuthorized(
                "Not authorized as admin.".to_string(),
            ));
        }
        Ok(resp)
    }

    /// Register a new admin account. The server logs the account in as part
    /// of registration, so a successful call is immediately authorized.
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<AdminAuthResponse> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(StoreError::Validation("All fields are required.".to_string()));
        }
        let req = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AdminAuthResponse = self
            .client
            .post_json("admin-register/", &req)
            .map_err(auth_rejection)?;
        if !resp.is_admin {
            return Err(StoreError::NotAuthorized(
                "Registration did not grant admin access".to_string(),
            ));
        }
        self.session
            .set_tokens(resp.access.as_deref(), resp.refresh.as_deref())?;
        Ok(resp)
    }

    /// Probe whether the current session is authorized as admin
    /// (`GET /admin-login/`).
    pub fn authorize(&self) -> Result<bool> {
        let resp: AdminAuthResponse = self
            .client
            .get_json("admin-login/")
            .map_err(auth_rejection)?;
        Ok(resp.is_admin)
    }

    /// Drop the local tokens and end the server-side admin session. The
    /// server call is best effort; the tokens are cleared regardless. A
    /// logged-in shopper session (the stored username) is left untouched.
    pub fn logout(&self) -> Result<()> {
        self.session.clear_tokens()?;
        if let Err(e) = self.client.post_empty("admin-login/") {
            log::warn!("admin logout request failed: {}", e);
        }
        Ok(())
    }

    // -- Product CRUD ------------------------------------------------------

    /// Create a product (`POST /products/`, multipart). All fields including
    /// the image are required.
    pub fn create_product(&self, form: &ProductForm) -> Result<Product> {
        validate_form(form, false)?;
        let multipart = build_form(form)?;
        self.client.post_multipart("products/", multipart)
    }

    /// Update an existing product (`PUT /products/{id}`, multipart). Leaving
    /// `image` unset keeps the product's existing image.
    pub fn update_product(&self, id: u64, form: &ProductForm) -> Result<Product> {
        validate_form(form, true)?;
        let multipart = build_form(form)?;
        self.client
            .put_multipart(&format!("products/{}", id), multipart)
    }

    /// Delete a product (`DELETE /products/{id}`).
    pub fn delete_product(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("products/{}", id))
    }
}

/// Client-side submission check, applied before any bytes leave the machine.
///
/// Mirrors the dashboard form rule: every text field non-empty, and an image
/// file present unless this is an update of an existing product.
pub fn validate_form(form: &ProductForm, is_update: bool) -> Result<()> {
    if form.name.trim().is_empty()
        || form.description.trim().is_empty()
        || form.price.trim().is_empty()
        || form.stock.trim().is_empty()
        || (form.image.is_none() && !is_update)
    {
        return Err(StoreError::Validation("All fields are required.".to_string()));
    }
    Ok(())
}

fn build_form(form: &ProductForm) -> Result<Form> {
    let mut multipart = Form::new()
        .text("name", form.name.clone())
        .text("description", form.description.clone())
        .text("price", form.price.clone())
        .text("stock", form.stock.clone());
    if let Some(path) = &form.image {
        multipart = multipart.file("image", path)?;
    }
    Ok(multipart)
}

/// Admin endpoints signal rejection with 401/403; fold those into the
/// authorization failure bucket and pass everything else through.
fn auth_rejection(err: StoreError) -> StoreError {
    match err {
        StoreError::Api { status, message } if status == 401 || status == 403 => {
            StoreError::NotAuthorized(message)
        }
        other => other,
    }
}
