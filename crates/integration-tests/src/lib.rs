//! Integration tests for Cafe Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cafe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `core_properties` - Ledger and catalog behaviour across operation sequences
//! - `admin_dashboard` - Dashboard page and order status form
//! - `admin_menu` - Menu pages and forms
//! - `admin_api` - JSON API
//!
//! Router tests drive [`cafe_admin::app`] in-process through
//! `tower::ServiceExt::oneshot`; no socket is bound.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use cafe_admin::{config::AdminConfig, seed::SeedFile, state::AppState};
use tower::ServiceExt;

/// Largest response body the helpers will buffer.
const BODY_LIMIT: usize = 1024 * 1024;

/// A router over freshly seeded state.
pub struct TestContext {
    pub state: AppState,
    router: Router,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build state from the built-in seed.
    ///
    /// # Panics
    ///
    /// Panics if the built-in seed fails to load.
    #[must_use]
    pub fn new() -> Self {
        let (ledger, catalog) = SeedFile::builtin()
            .and_then(|seed| seed.into_cores(chrono::Utc::now()))
            .expect("built-in seed loads");
        let state = AppState::new(AdminConfig::default(), ledger, catalog);
        let router = cafe_admin::app(state.clone());
        Self { state, router }
    }

    /// Send a request through the router and buffer the response.
    ///
    /// # Panics
    ///
    /// Panics if the body exceeds the buffer limit.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("response body fits in memory");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// # Panics
    ///
    /// Panics if `uri` is not a valid request target.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Submit a URL-encoded form, e.g. `"status=completed"`.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a valid request target.
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// Send a JSON API request, with an optional body.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a valid request target.
    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");
        self.send(request).await
    }
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }

    /// Whether this is a redirect to `target`.
    #[must_use]
    pub fn redirects_to(&self, target: &str) -> bool {
        self.status.is_redirection() && self.location.as_deref() == Some(target)
    }
}
