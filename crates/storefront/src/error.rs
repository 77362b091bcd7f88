//! Storefront error type and its HTTP mapping.
//!
//! Handlers return [`Result<T>`]. Errors become a JSON body of the form
//! `{"error": "...", "field": "city"}` (`field` only for a blank checkout
//! field). Session store failures are captured to Sentry and reported to the
//! client without detail.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use brightcart_core::CheckoutError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing session state failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Checkout submission was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Checkout(CheckoutError::EmptyCart) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Checkout(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::Session(_) => ErrorBody {
                error: "Internal server error".to_string(),
                field: None,
            },
            Self::Checkout(err) => ErrorBody {
                error: err.to_string(),
                field: match err {
                    CheckoutError::MissingField(field) => Some(*field),
                    CheckoutError::InvalidEmail(_) => Some("email"),
                    CheckoutError::EmptyCart => None,
                },
            },
            Self::NotFound(_) | Self::BadRequest(_) => ErrorBody {
                error: self.to_string(),
                field: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Session(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Session store failure"
            );
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a shopper action as a Sentry breadcrumb.
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "3")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data.unwrap_or_default() {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 42".to_string());
        assert_eq!(err.to_string(), "Not found: product 42");

        let err = AppError::Checkout(CheckoutError::MissingField("city"));
        assert_eq!(err.to_string(), "Checkout error: city is required");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::EmptyCart)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::MissingField("cvv"))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_checkout_error_body_names_field() {
        let body = AppError::Checkout(CheckoutError::MissingField("postal_code")).body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "postal_code is required");
        assert_eq!(json["field"], "postal_code");

        let body = AppError::Checkout(CheckoutError::InvalidEmail("x".to_string())).body();
        assert_eq!(body.field, Some("email"));
    }

    #[test]
    fn test_json_rejection_is_bad_request() {
        let err = AppError::from(JsonRejection::from(
            axum::extract::rejection::MissingJsonContentType::default(),
        ));
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let json = serde_json::to_value(err.body()).unwrap();
        let message = json["error"].as_str().unwrap();
        assert!(message.starts_with("Bad request: "));
        assert!(message.contains("Content-Type"));
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_empty_cart_body_has_no_field() {
        let json = serde_json::to_value(AppError::Checkout(CheckoutError::EmptyCart).body()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "cart is empty" }));
    }
}
