//! Anonymized dev logging for humanize/detect events.
//!
//! Raw content is never logged; events carry a short SHA-256 prefix of the input.

use tracing::info;

pub const ENV_DEV_LOG: &str = "HUMANIZE_DEV_LOG";

// HUMANIZE_DEV_LOG=1 AND dev env (debug or SHUTTLE_ENV in {local,development,dev})
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    on && is_dev_env()
}

pub fn is_dev_env() -> bool {
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// First 6 bytes of SHA-256 as lowercase hex.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    use std::fmt::Write as _;

    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

pub(crate) fn truncate_vec<T: ToString>(v: &[T], max: usize) -> Vec<String> {
    v.iter().take(max).map(|x| x.to_string()).collect()
}

pub fn log_humanize_event(input: &str, intensity: u8, transformations: usize, score: f64) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(input);
    info!(
        target: "humanize",
        %id, intensity, transformations, score,
        event = "humanize"
    );
}

pub fn log_detect_event(input: &str, score: u8, issues: &[String]) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(input);
    let issues_short = truncate_vec(issues, 5);
    info!(target: "humanize", %id, score, event = "detect", issues = ?issues_short);
}
