//! `BrightCart` Storefront - single-page demo shop.
//!
//! Serves the product catalog, a per-visitor cart, checkout and order
//! tracking as JSON over HTTP.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Catalog held in memory, shared across requests
//! - Cart, current view and current order kept in the visitor's session
//!   (tower-sessions, in-memory store)

#![cfg_attr(not(test), forbid(unsafe_code))]

use brightcart_core::Catalog;
use brightcart_storefront::{app, config::StorefrontConfig, state::AppState, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let sentry_guard = telemetry::init_sentry(&config)?;
    telemetry::init_tracing();
    if sentry_guard.is_some() {
        tracing::info!("Sentry initialized");
    }

    let catalog = Catalog::sample();
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let addr = config.socket_addr();
    let state = AppState::new(config, catalog);

    let app = app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("storefront listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
///
/// A signal that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
