//! Logging setup and the route-logging response hook.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use urltpl_application::ResponseHook;
use urltpl_domain::ResponseSpec;

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"info,urltpl_infrastructure=debug"`).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Logs one `info` event per response, labelled by route rather than URL.
pub fn log_route(response: &ResponseSpec) {
    let route = &response.route;
    tracing::info!(
        status = response.status.as_u16(),
        url = route.url.as_deref().unwrap_or_default(),
        route = route.route().unwrap_or_default(),
        route_params = ?route.url_template_params,
        duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
        "request completed"
    );
}

/// `log_route` boxed as a response hook.
#[must_use]
pub fn route_logger() -> ResponseHook {
    Box::new(log_route)
}
