//! Sentry and tracing setup for the storefront binary.

use std::borrow::Cow;

use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use sentry::types::{Dsn, ParseDsnError};
use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::StorefrontConfig;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "brightcart_storefront=info,tower_http=debug";

/// Start the Sentry client when a DSN is configured.
///
/// The returned guard flushes pending events on drop and must live as long
/// as the server. Must run before [`init_tracing`].
///
/// # Errors
///
/// Returns an error if `SENTRY_DSN` is set but malformed.
pub fn init_sentry(
    config: &StorefrontConfig,
) -> Result<Option<sentry::ClientInitGuard>, ParseDsnError> {
    let Some(dsn) = config.sentry_dsn.as_deref() else {
        return Ok(None);
    };
    let dsn: Dsn = dsn.parse()?;

    Ok(Some(sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        environment: config.sentry_environment.clone().map(Cow::Owned),
        sample_rate: config.sentry_sample_rate,
        traces_sample_rate: config.sentry_traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    })))
}

/// Which tracing events reach Sentry, and as what.
///
/// Errors become Sentry events; warnings and info become breadcrumbs on the
/// next event. Debug output (per-request `tower_http` lines) stays local.
fn sentry_event_filter(metadata: &Metadata<'_>) -> EventFilter {
    match *metadata.level() {
        Level::ERROR => EventFilter::Event,
        Level::WARN | Level::INFO => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    }
}

/// Install the global tracing subscriber: `RUST_LOG` (or
/// [`DEFAULT_LOG_FILTER`]), human-readable output and the Sentry layer.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}
