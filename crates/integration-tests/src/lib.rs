//! Integration tests for `BrightCart`.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`;
//! no server or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brightcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - Product listing, filtering and detail
//! - `cart` - Session cart mutations
//! - `checkout` - Order placement and tracking
//! - `sessions` - View state and per-visitor isolation

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use brightcart_core::Catalog;
use brightcart_storefront::{app, config::StorefrontConfig, state::AppState};

/// Largest response body the helpers will read.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A storefront instance backed by the sample catalog.
///
/// Clients created from the same instance share the session store, so each
/// client behaves like a separate visitor to one running server.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build a storefront with default configuration.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default(), Catalog::sample());
        Self { router: app(state) }
    }

    /// A new visitor with no session cookie yet.
    #[must_use]
    pub fn client(&self) -> TestClient {
        TestClient {
            router: self.router.clone(),
            cookie: None,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// One visitor. Keeps the session cookie between requests like a browser.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

/// A response with its body parsed as JSON when possible.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub json: Value,
}

impl TestClient {
    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None, None).await
    }

    /// Send a GET request with one extra header.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get_with_header(&mut self, path: &str, name: &str, value: &str) -> TestResponse {
        self.send(Method::GET, path, None, Some((name, value))).await
    }

    /// Send a POST request with no body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post(&mut self, path: &str) -> TestResponse {
        self.send(Method::POST, path, None, None).await
    }

    /// Send a POST request with a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_json(&mut self, path: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, path, Some(body), None).await
    }

    /// The `name=value` session cookie the server issued, if any.
    #[must_use]
    pub fn session_cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    async fn send(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        extra_header: Option<(&str, &str)>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some((name, value)) = extra_header {
            builder = builder.header(name, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        {
            let pair = set_cookie.split(';').next().unwrap_or_default().trim();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("Failed to read response body");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            json,
        }
    }
}

/// A checkout form with every required field filled in.
#[must_use]
pub fn checkout_form() -> Value {
    serde_json::json!({
        "email": "grace@example.com",
        "first_name": "Grace",
        "last_name": "Hopper",
        "address": "1 Navy Yard",
        "city": "Arlington",
        "postal_code": "22202",
        "country": "US",
        "card_number": "4111-1111-1111-1234",
        "expiry_date": "09/29",
        "cvv": "321",
        "card_name": "G Hopper"
    })
}
