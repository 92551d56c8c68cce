//! Humanizer service binary entrypoint.
//! Boots the Axum HTTP server with the humanize routes and `/metrics`.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghostwriter_humanizer::api::{self, AppState};
use ghostwriter_humanizer::devlog::{is_dev_env, ENV_DEV_LOG};
use ghostwriter_humanizer::metrics::Metrics;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - HUMANIZE_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var(ENV_DEV_LOG).ok().is_some_and(|v| v == "1");
    if !(dev_flag && is_dev_env()) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ghostwriter_humanizer=info,humanize=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // .env in local/dev; no-op in prod environments
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let metrics = Metrics::init().map_err(shuttle_runtime::Error::Custom)?;
    let state = AppState::from_env();
    tracing::info!(
        intensity = state.base_config.intensity(),
        "humanize config loaded"
    );

    let router = api::create_router(state).merge(metrics.router());
    Ok(router.into())
}
