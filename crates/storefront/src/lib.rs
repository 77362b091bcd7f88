//! `BrightCart` storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::{
    create_session_layer, propagate_request_id_layer, request_span, set_request_id_layer,
    tag_request_id,
};
use crate::state::AppState;

/// Build the storefront application router.
///
/// Sentry layers are added by the binary so tests can run without a client.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes::routes()
        .layer(session_layer)
        .layer(axum::middleware::from_fn(tag_request_id))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(set_request_id_layer())
        .with_state(state)
}
