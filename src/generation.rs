//! Upstream text generation: sampling knobs derived from intensity, and the
//! generator seam whose output feeds the humanizer.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::humanize::{HumanizationResult, HumanizeService};
use crate::probability::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl GenerationParams {
    /// temperature 0.4→1.2, topP 0.85→0.95, topK 20→40, all linear in intensity.
    pub fn for_intensity(intensity: u8) -> Self {
        let i = normalize(f64::from(intensity));
        Self {
            temperature: 0.4 + i * 0.8,
            top_p: 0.85 + i * 0.10,
            top_k: (20.0 + i * 20.0).round() as u32,
        }
    }
}

/// External LLM capability: `generate(prompt, params) -> text`.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        params: &'a GenerationParams,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
    /// Generator name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Returns the same text for every prompt. For tests and local runs.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    pub text: String,
}

impl StaticGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextGenerator for StaticGenerator {
    fn generate<'a>(
        &'a self,
        _prompt: &'a str,
        _params: &'a GenerationParams,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        let out = self.text.clone();
        Box::pin(async move { Ok(out) })
    }
    fn name(&self) -> &'static str {
        "static"
    }
}

/// Generate with intensity-derived params, then humanize the returned text.
pub async fn generate_humanized(
    generator: &dyn TextGenerator,
    prompt: &str,
    service: &mut HumanizeService,
) -> anyhow::Result<HumanizationResult> {
    let params = GenerationParams::for_intensity(service.config().intensity());
    debug!(
        target: "humanize",
        generator = generator.name(),
        temperature = params.temperature,
        top_k = params.top_k,
        "generating"
    );
    let raw = generator
        .generate(prompt, &params)
        .await
        .with_context(|| format!("text generator '{}' failed", generator.name()))?;
    Ok(service.humanize(&raw))
}
