// src/config/mod.rs
//! Configuration loading.
//!
//! Resolution order for [`load_default`]:
//! 1) `$HUMANIZE_CONFIG_PATH`
//! 2) `config/humanize.toml`
//! 3) `config/humanize.json`
//! 4) built-in defaults
//!
//! `$HUMANIZE_INTENSITY` overrides the intensity of whatever was loaded.

pub mod humanize;

pub use humanize::{EmphasisStrategy, HumanizationConfig, LogicStyle, RhythmPattern};

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "HUMANIZE_CONFIG_PATH";
pub const ENV_INTENSITY: &str = "HUMANIZE_INTENSITY";

const DEFAULT_TOML_PATH: &str = "config/humanize.toml";
const DEFAULT_JSON_PATH: &str = "config/humanize.json";

/// Load a config from an explicit path. Supports TOML or JSON.
pub fn load_from_file(path: &Path) -> Result<HumanizationConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading humanize config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let cfg = parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing humanize config {}", path.display()))?;
    Ok(cfg.sanitized())
}

/// Load using env var + fallbacks, then apply `$HUMANIZE_INTENSITY`.
pub fn load_default() -> Result<HumanizationConfig> {
    let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        load_from_file(&pb)?
    } else if Path::new(DEFAULT_TOML_PATH).exists() {
        load_from_file(Path::new(DEFAULT_TOML_PATH))?
    } else if Path::new(DEFAULT_JSON_PATH).exists() {
        load_from_file(Path::new(DEFAULT_JSON_PATH))?
    } else {
        HumanizationConfig::default()
    };

    if let Some(i) = parse_intensity_env(std::env::var(ENV_INTENSITY).ok()) {
        cfg.intensity = i;
    }
    Ok(cfg)
}

// parse optional intensity env and clamp to <0..=100>
fn parse_intensity_env(raw: Option<String>) -> Option<u8> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
}

fn parse_config(s: &str, hint_ext: &str) -> Result<HumanizationConfig> {
    let looks_json = s.trim_start().starts_with('{');
    if hint_ext == "json" || (hint_ext != "toml" && looks_json) {
        return serde_json::from_str(s).map_err(|e| anyhow!("invalid JSON config: {e}"));
    }
    match toml::from_str::<HumanizationConfig>(s) {
        Ok(cfg) => Ok(cfg),
        Err(toml_err) if !looks_json => Err(anyhow!("invalid TOML config: {toml_err}")),
        Err(_) => serde_json::from_str(s).map_err(|e| anyhow!("invalid JSON config: {e}")),
    }
}
