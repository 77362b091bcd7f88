//! Request ID layers.
//!
//! `SetRequestIdLayer` keeps an upstream `x-request-id` or assigns a UUID v4,
//! `PropagateRequestIdLayer` copies it onto the response. In between, the ID
//! becomes a field on the request span and a tag on the Sentry scope.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tracing::Span;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layer that assigns a request ID when the client sent none.
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that echoes the request ID in the response headers.
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// The request's ID as text, if one was assigned and is valid UTF-8.
#[must_use]
pub fn request_id_of(request: &Request) -> Option<&str> {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
}

/// Span for one HTTP request, used by the `TraceLayer`.
pub fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = request_id_of(request).unwrap_or("-"),
    )
}

/// Tag the Sentry scope with the request ID so captured errors can be
/// matched to log lines.
pub async fn tag_request_id(request: Request, next: Next) -> Response {
    if let Some(id) = request_id_of(&request) {
        sentry::configure_scope(|scope| scope.set_tag("request_id", id));
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_request_id_of_reads_extension() {
        let mut request = Request::new(axum::body::Body::empty());
        assert_eq!(request_id_of(&request), None);

        request
            .extensions_mut()
            .insert(RequestId::new(HeaderValue::from_static("req-42")));
        assert_eq!(request_id_of(&request), Some("req-42"));
    }
}
