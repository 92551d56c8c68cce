//! AI-flavor detector: how generated does this text read? Higher = more AI.

use serde::{Deserialize, Serialize};

use crate::devlog;
use crate::phrases::{COMPILED_AI_PHRASES, EMOTIONAL_MARKERS, ENUMERATION_WORDS, FORMAL_CONNECTIVES};
use crate::segment::{coefficient_of_variation, paragraph_lengths, sentence_count};

pub const MAX_SCORE: u8 = 100;
/// Above this the report opens with an urgency banner.
pub const URGENT_SCORE: u8 = 60;

const PHRASE_WEIGHT: u32 = 10;
const CONNECTIVE_WEIGHT: u32 = 8;
const LOW_EMOTION_PENALTY: u32 = 15;
const UNIFORM_PARAGRAPH_PENALTY: u32 = 10;
const ENUMERATION_WEIGHT: u32 = 5;

const MIN_EMOTION_DENSITY: f64 = 0.1;
const MIN_PARAGRAPH_CV: f64 = 0.3;
const MAX_ENUMERATIONS: usize = 2;

pub const URGENT_BANNER: &str =
    "Strong AI flavor detected: raise intensity and switch to a conversational style";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiFlavorReport {
    pub score: u8,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

struct Finding {
    points: u32,
    issue: String,
    suggestion: &'static str,
}

/// Score `content` for AI flavor and list what drove the score.
///
/// Blank content is reported as score 0 with no issues. The low-emotion and
/// uniform-paragraph checks would otherwise charge 25 points for text that has
/// nothing to judge.
pub fn detect_ai_flavor(content: &str) -> AiFlavorReport {
    crate::metrics::record_detect();
    if content.trim().is_empty() {
        return AiFlavorReport::default();
    }

    let lower = content.to_lowercase();
    let mut findings: Vec<Finding> = Vec::new();

    let phrase_hits: usize = COMPILED_AI_PHRASES
        .iter()
        .map(|cp| cp.bare.find_iter(content).count())
        .sum();
    if phrase_hits > 0 {
        findings.push(Finding {
            points: PHRASE_WEIGHT * phrase_hits as u32,
            issue: format!("{phrase_hits} stock AI phrase(s) found"),
            suggestion: "Replace stock transitions and qualifiers with plain, personal wording",
        });
    }

    let connective_hits = count_all(&lower, FORMAL_CONNECTIVES);
    if connective_hits > 0 {
        findings.push(Finding {
            points: CONNECTIVE_WEIGHT * connective_hits as u32,
            issue: format!("{connective_hits} formal connective(s) make the tone stiff"),
            suggestion: "Swap formal connectives for everyday ones",
        });
    }

    let sentences = sentence_count(content).max(1);
    let density = count_all(&lower, EMOTIONAL_MARKERS) as f64 / sentences as f64;
    if density < MIN_EMOTION_DENSITY {
        findings.push(Finding {
            points: LOW_EMOTION_PENALTY,
            issue: format!("Few emotional markers ({density:.2} per sentence)"),
            suggestion: "Add opinions, reactions and first-person asides",
        });
    }

    let cv = coefficient_of_variation(&paragraph_lengths(content));
    if cv < MIN_PARAGRAPH_CV {
        findings.push(Finding {
            points: UNIFORM_PARAGRAPH_PENALTY,
            issue: format!("Paragraph lengths are too uniform (variation {cv:.2})"),
            suggestion: "Mix short punchy paragraphs with longer ones",
        });
    }

    let enumerations = count_all(&lower, ENUMERATION_WORDS);
    if enumerations > MAX_ENUMERATIONS {
        findings.push(Finding {
            points: ENUMERATION_WEIGHT * enumerations as u32,
            issue: format!("{enumerations} enumeration words read like an outline"),
            suggestion: "Drop the first/second/finally scaffolding and let ideas flow",
        });
    }

    // stable: ties keep check order
    findings.sort_by(|a, b| b.points.cmp(&a.points));

    let total: u32 = findings.iter().map(|f| f.points).sum();
    let score = total.min(u32::from(MAX_SCORE)) as u8;

    let mut suggestions: Vec<String> = Vec::with_capacity(findings.len() + 1);
    if score > URGENT_SCORE {
        suggestions.push(URGENT_BANNER.to_string());
    }
    suggestions.extend(findings.iter().map(|f| f.suggestion.to_string()));
    let issues: Vec<String> = findings.into_iter().map(|f| f.issue).collect();

    devlog::log_detect_event(content, score, &issues);
    AiFlavorReport {
        score,
        issues,
        suggestions,
    }
}

// non-overlapping occurrences of every word; `lower` must already be lowercased
fn count_all(lower: &str, words: &[&str]) -> usize {
    words
        .iter()
        .map(|w| lower.matches(w.to_lowercase().as_str()).count())
        .sum()
}
