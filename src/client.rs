//! Shared HTTP plumbing: base URL handling, cookie jar, CSRF echo and
//! response-to-error mapping.
//!
//! All requests go through one `reqwest` blocking client with a shared cookie
//! jar, so the Django session cookie set by admin login rides along on later
//! calls (the "credentials: include" behavior of the original). The
//! `csrftoken` cookie, when present, is echoed back as an `X-CSRFToken`
//! header on state-changing requests.

use crate::config;
use crate::error::{Result, StoreError};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, Response};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client bound to one store API base URL.
pub struct ApiClient {
    base_url: Url,
    http: Client,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Build a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::InvalidArgument(format!("Invalid base URL: {}", e)))?;
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .timeout(timeout)
            .cookie_provider(jar.clone())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { base_url, http, jar })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join a path (e.g. `"products/"`) onto the base URL.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::InvalidArgument(format!("Invalid path '{}': {}", path, e)))
    }

    /// Current CSRF token, read from the `csrftoken` cookie if the server
    /// has set one on this jar.
    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let cookies = header.to_str().ok()?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == config::CSRF_COOKIE).then(|| value.to_string())
        })
    }

    // -- Request helpers ---------------------------------------------------

    /// `GET path` returning deserialized JSON.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        log::debug!("GET {}", url);
        let resp = self.http.get(url).send()?;
        self.handle(path, resp)
    }

    /// `POST path` with a JSON body, returning deserialized JSON.
    pub fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path)?;
        log::debug!("POST {}", url);
        let mut req = self.http.post(url).json(body);
        if let Some(token) = self.csrf_token() {
            req = req.header(config::CSRF_HEADER, token);
        }
        let resp = req.send()?;
        self.handle(path, resp)
    }

    /// `POST path` with an empty body (used by the admin logout endpoint).
    pub fn post_empty(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        log::debug!("POST {}", url);
        let mut req = self.http.post(url);
        if let Some(token) = self.csrf_token() {
            req = req.header(config::CSRF_HEADER, token);
        }
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.rejection(path, status, resp))
        }
    }

    /// `POST path` with a multipart form, returning deserialized JSON.
    pub fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let url = self.url(path)?;
        log::debug!("POST (multipart) {}", url);
        let mut req = self.http.post(url).multipart(form);
        if let Some(token) = self.csrf_token() {
            req = req.header(config::CSRF_HEADER, token);
        }
        let resp = req.send()?;
        self.handle(path, resp)
    }

    /// `PUT path` with a multipart form, returning deserialized JSON.
    pub fn put_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let url = self.url(path)?;
        log::debug!("PUT (multipart) {}", url);
        let mut req = self.http.put(url).multipart(form);
        if let Some(token) = self.csrf_token() {
            req = req.header(config::CSRF_HEADER, token);
        }
        let resp = req.send()?;
        self.handle(path, resp)
    }

    /// `DELETE path`, expecting an empty success body.
    pub fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        log::debug!("DELETE {}", url);
        let mut req = self.http.delete(url);
        if let Some(token) = self.csrf_token() {
            req = req.header(config::CSRF_HEADER, token);
        }
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.rejection(path, status, resp))
        }
    }

    // -- Response mapping --------------------------------------------------

    fn handle<T: DeserializeOwned>(&self, path: &str, resp: Response) -> Result<T> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json()?);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("{} returned 404", path)));
        }
        Err(self.rejection(path, status, resp))
    }

    fn rejection(&self, path: &str, status: StatusCode, resp: Response) -> StoreError {
        let body: serde_json::Value = resp.json().unwrap_or(serde_json::Value::Null);
        let message = extract_message(&body)
            .unwrap_or_else(|| format!("{} failed with status {}", path, status));
        log::warn!("{} rejected ({}): {}", path, status, message);
        StoreError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers the backend's `message`/`detail` fields; falls back to flattening
/// a DRF field-error map (`{"email": ["This field is required."]}`) into one
/// space-joined string, the way the original rendered registration errors.
fn extract_message(body: &serde_json::Value) -> Option<String> {
    if let Some(msg) = body.get("message").and_then(|v| v.as_str()) {
        return Some(msg.to_string());
    }
    if let Some(msg) = body.get("detail").and_then(|v| v.as_str()) {
        return Some(msg.to_string());
    }
    let map = body.as_object()?;
    let mut parts: Vec<String> = Vec::new();
    for value in map.values() {
        match value {
            serde_json::Value::String(s) => parts.push(s.clone()),
            serde_json::Value::Array(items) => {
                parts.extend(items.iter().filter_map(|v| v.as_str().map(String::from)));
            }
            _ => {}
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
