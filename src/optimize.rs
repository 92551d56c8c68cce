//! Config auto-tuning from the detector score.

use crate::config::{EmphasisStrategy, HumanizationConfig, LogicStyle, RhythmPattern};
use crate::detect::{detect_ai_flavor, AiFlavorReport};

const STRONG_SCORE: u8 = 50;
const MILD_SCORE: u8 = 25;
const STRONG_BOOST: u8 = 20;
const STRONG_CAP: u8 = 95;
const MILD_BOOST: u8 = 10;
const MILD_CAP: u8 = 80;

/// Adjust `config` for a detector `score`. Returns a new config.
pub fn optimize_for_score(score: u8, config: &HumanizationConfig) -> HumanizationConfig {
    let mut next = config.clone();
    let i = config.intensity();
    if score > STRONG_SCORE {
        next.intensity = boost(i, STRONG_BOOST, STRONG_CAP);
        next.logic_style = LogicStyle::Conversational;
        next.rhythm_pattern = RhythmPattern::Varied;
        next.emphasis_strategy = EmphasisStrategy::Emotional;
        next.remove_ai_phrases = true;
        next.add_opinions = true;
        next.vary_paragraph_length = true;
        next.use_conversational_tone = true;
    } else if score > MILD_SCORE {
        next.intensity = boost(i, MILD_BOOST, MILD_CAP);
        next.add_opinions = true;
        next.use_conversational_tone = true;
    }
    next
}

// add `by`, capped at `cap`; an intensity already above the cap comes down to it
fn boost(i: u8, by: u8, cap: u8) -> u8 {
    i.saturating_add(by).min(cap)
}

/// Detect, then tune `config` for `content`.
pub fn generate_optimization_suggestions(
    content: &str,
    config: &HumanizationConfig,
) -> HumanizationConfig {
    optimize_with_report(content, config).1
}

/// Same as [`generate_optimization_suggestions`] but also hands back the report.
pub fn optimize_with_report(
    content: &str,
    config: &HumanizationConfig,
) -> (AiFlavorReport, HumanizationConfig) {
    let report = detect_ai_flavor(content);
    let tuned = optimize_for_score(report.score, config);
    (report, tuned)
}
