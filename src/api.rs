use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shuttle_axum::axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::config::{self, HumanizationConfig};
use crate::detect::{detect_ai_flavor, AiFlavorReport};
use crate::generation::GenerationParams;
use crate::humanize::{HumanizationResult, HumanizeService};
use crate::optimize::optimize_with_report;
use crate::random::{RandomSource, SeededRandom};

#[derive(Clone, Default)]
pub struct AppState {
    /// Config used when a request carries none.
    pub base_config: Arc<HumanizationConfig>,
}

impl AppState {
    pub fn new(base_config: HumanizationConfig) -> Self {
        Self {
            base_config: Arc::new(base_config.sanitized()),
        }
    }

    /// Resolve the base config via [`config::load_default`]; defaults on error.
    pub fn from_env() -> Self {
        match config::load_default() {
            Ok(cfg) => Self::new(cfg),
            Err(e) => {
                tracing::warn!(error = ?e, "humanize config load failed, using defaults");
                Self::default()
            }
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/config/default", get(default_config))
        .route("/humanize", post(humanize))
        .route("/detect", post(detect))
        .route("/optimize", post(optimize))
        .route("/generation-params", get(generation_params));

    #[cfg(feature = "debug")]
    let router = router.route("/debug/probabilities", get(debug_probabilities));

    router.layer(CorsLayer::very_permissive()).with_state(state)
}

#[derive(Deserialize)]
struct HumanizeReq {
    content: String,
    #[serde(default)]
    config: Option<HumanizationConfig>,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct DetectReq {
    content: String,
}

#[derive(Deserialize)]
struct OptimizeReq {
    content: String,
    #[serde(default)]
    config: Option<HumanizationConfig>,
}

#[derive(Serialize)]
struct OptimizeResp {
    report: AiFlavorReport,
    config: HumanizationConfig,
}

#[derive(Deserialize)]
struct IntensityQuery {
    intensity: Option<i64>,
}

impl IntensityQuery {
    fn resolve(&self, state: &AppState) -> u8 {
        self.intensity
            .map(|i| i.clamp(0, 100) as u8)
            .unwrap_or_else(|| state.base_config.intensity())
    }
}

async fn default_config(State(state): State<AppState>) -> Json<HumanizationConfig> {
    Json(state.base_config.as_ref().clone())
}

async fn humanize(
    State(state): State<AppState>,
    Json(body): Json<HumanizeReq>,
) -> Json<HumanizationResult> {
    let cfg = body
        .config
        .unwrap_or_else(|| state.base_config.as_ref().clone());
    let random: Box<dyn RandomSource> = match body.seed {
        Some(seed) => Box::new(SeededRandom::seeded(seed)),
        None => Box::new(SeededRandom::from_os()),
    };
    let mut svc = HumanizeService::with_random(cfg, random);
    Json(svc.humanize(&body.content))
}

async fn detect(Json(body): Json<DetectReq>) -> Json<AiFlavorReport> {
    Json(detect_ai_flavor(&body.content))
}

async fn optimize(
    State(state): State<AppState>,
    Json(body): Json<OptimizeReq>,
) -> Json<OptimizeResp> {
    let cfg = body
        .config
        .unwrap_or_else(|| state.base_config.as_ref().clone());
    let (report, config) = optimize_with_report(&body.content, &cfg);
    Json(OptimizeResp { report, config })
}

async fn generation_params(
    State(state): State<AppState>,
    Query(q): Query<IntensityQuery>,
) -> Json<GenerationParams> {
    Json(GenerationParams::for_intensity(q.resolve(&state)))
}

#[cfg(feature = "debug")]
async fn debug_probabilities(
    State(state): State<AppState>,
    Query(q): Query<IntensityQuery>,
) -> Json<crate::probability::Probabilities> {
    Json(crate::probability::probabilities(f64::from(q.resolve(&state))))
}
