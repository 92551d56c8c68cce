//! Humanity scorer: five surface metrics in `[0,100]` and their mean.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::HumanizationConfig;
use crate::phrases::{HumanCategory, AI_OPENERS, AI_QUALIFIERS, AI_TRANSITIONS, EMOTIONAL_MARKERS};
use crate::segment::{mean_and_stddev, paragraph_lengths};

pub const NATURALNESS_THRESHOLD: f64 = 70.0;
pub const PERSONALITY_THRESHOLD: f64 = 50.0;
pub const RHYTHM_THRESHOLD: f64 = 60.0;
pub const EMOTIONAL_THRESHOLD: f64 = 40.0;

const LOGIC_BASELINE: f64 = 50.0;
const LOGIC_SIGNAL: f64 = 10.0;

static CONTRASTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"但|然而|(?i:\b(?:but|however)\b)").expect("contrastive regex")
});

static SHORT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[^。\n]{1,20}。$").expect("short line regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub logic_variance: f64,
    pub vocabulary_naturalness: f64,
    pub rhythm_variation: f64,
    pub emotional_content: f64,
    pub personality_strength: f64,
}

impl ScoreBreakdown {
    fn values(&self) -> [f64; 5] {
        [
            self.logic_variance,
            self.vocabulary_naturalness,
            self.rhythm_variation,
            self.emotional_content,
            self.personality_strength,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanityScore {
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
}

/// Score `content`. The config contributes the caller's phrases as personality
/// and emotional signal.
pub fn calculate_humanity_score(content: &str, config: &HumanizationConfig) -> HumanityScore {
    let lower = content.to_lowercase();
    let breakdown = ScoreBreakdown {
        logic_variance: logic_variance(content),
        vocabulary_naturalness: vocabulary_naturalness(&lower),
        rhythm_variation: rhythm_variation(content),
        emotional_content: emotional_content(&lower, config),
        personality_strength: personality_strength(content, config),
    };
    let overall = breakdown.values().iter().sum::<f64>() / 5.0;

    let mut suggestions = Vec::new();
    if breakdown.vocabulary_naturalness < NATURALNESS_THRESHOLD {
        suggestions.push("Remove more AI cliché phrases".to_string());
    }
    if breakdown.personality_strength < PERSONALITY_THRESHOLD {
        suggestions.push("Add more conversational phrases and personal touches".to_string());
    }
    if breakdown.rhythm_variation < RHYTHM_THRESHOLD {
        suggestions.push("Vary paragraph lengths more dramatically".to_string());
    }
    if breakdown.emotional_content < EMOTIONAL_THRESHOLD {
        suggestions.push("Include more opinions and emotional reactions".to_string());
    }

    HumanityScore {
        overall: overall.clamp(0.0, 100.0),
        breakdown,
        suggestions,
    }
}

// 100 - 10 per distinct transition/qualifier/opener found
fn vocabulary_naturalness(lower: &str) -> f64 {
    let hits = AI_TRANSITIONS
        .iter()
        .chain(AI_QUALIFIERS)
        .chain(AI_OPENERS)
        .filter(|p| lower.contains(&p.to_lowercase()))
        .count();
    (100.0 - 10.0 * hits as f64).max(0.0)
}

fn personality_strength(content: &str, config: &HumanizationConfig) -> f64 {
    let mut phrases: BTreeSet<&str> = HumanCategory::ALL
        .into_iter()
        .flat_map(|c| c.phrases().iter().copied())
        .collect();
    phrases.extend(config.user_phrases());
    let hits = phrases.iter().filter(|p| content.contains(**p)).count();
    (15.0 * hits as f64).min(100.0)
}

fn rhythm_variation(content: &str) -> f64 {
    let (mean, sd) = mean_and_stddev(&paragraph_lengths(content));
    if mean <= f64::EPSILON {
        return 0.0;
    }
    (100.0 * sd / mean).min(100.0)
}

fn emotional_content(lower: &str, config: &HumanizationConfig) -> f64 {
    let mut markers: BTreeSet<String> = EMOTIONAL_MARKERS.iter().map(|m| m.to_lowercase()).collect();
    markers.extend(config.user_phrases().map(str::to_lowercase));
    let hits: usize = markers.iter().map(|m| lower.matches(m.as_str()).count()).sum();
    (5.0 * hits as f64).min(100.0)
}

fn logic_variance(content: &str) -> f64 {
    let signals = [
        CONTRASTIVE.is_match(content),
        content.contains("...") || content.contains('…'),
        (content.contains('（') && content.contains('）'))
            || (content.contains('(') && content.contains(')')),
        SHORT_LINE.is_match(content),
        content.contains('？') || content.contains('?'),
    ];
    let n = signals.iter().filter(|s| **s).count();
    (LOGIC_BASELINE + LOGIC_SIGNAL * n as f64).min(100.0)
}
