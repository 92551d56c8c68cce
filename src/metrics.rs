use anyhow::Context;
use axum::{routing::get, Router};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::humanize::HumanizationResult;

pub const HUMANIZE_REQUESTS: &str = "humanize_requests_total";
pub const HUMANIZE_TRANSFORMATIONS: &str = "humanize_transformations_total";
pub const AI_FLAVOR_CHECKS: &str = "ai_flavor_checks_total";
pub const HUMANIZE_LAST_SCORE: &str = "humanize_last_score";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;
        Ok(Self { handle })
    }

    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// Count one humanize call, its log entries per type, and the final score.
/// No-op until a recorder is installed.
pub fn record_humanize(result: &HumanizationResult) {
    counter!(HUMANIZE_REQUESTS).increment(1);
    for entry in &result.transformations {
        counter!(HUMANIZE_TRANSFORMATIONS, "type" => entry.kind.as_str()).increment(1);
    }
    gauge!(HUMANIZE_LAST_SCORE).set(result.humanity_score.overall);
}

pub fn record_detect() {
    counter!(AI_FLAVOR_CHECKS).increment(1);
}
