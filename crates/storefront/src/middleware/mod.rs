//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions; added by the binary)
//! 2. Set request ID (upstream `x-request-id` or UUID v4)
//! 3. `TraceLayer` (request span carrying the request ID)
//! 4. Propagate request ID (echo it on the response)
//! 5. Sentry scope tag for the request ID
//! 6. Session layer (tower-sessions with in-memory store)

pub mod request_id;
pub mod session;

pub use request_id::{
    REQUEST_ID_HEADER, propagate_request_id_layer, request_span, set_request_id_layer,
    tag_request_id,
};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
