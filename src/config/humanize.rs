// src/config/humanize.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::phrases::{HUMAN_CONVERSATIONAL, HUMAN_EMPHASIS};

pub const DEFAULT_INTENSITY: u8 = 70;
pub const MAX_INTENSITY: u8 = 100;

/// Paragraph-level structural rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LogicStyle {
    /// Passthrough; also the fallback for unknown values.
    #[default]
    Linear,
    Spiral,
    Conversational,
    Storytelling,
}

impl From<String> for LogicStyle {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "spiral" => LogicStyle::Spiral,
            "conversational" => LogicStyle::Conversational,
            "storytelling" => LogicStyle::Storytelling,
            _ => LogicStyle::Linear,
        }
    }
}

/// Paragraph-length shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RhythmPattern {
    #[default]
    Uniform,
    Varied,
    Staccato,
    Flowing,
}

impl From<String> for RhythmPattern {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "varied" => RhythmPattern::Varied,
            "staccato" => RhythmPattern::Staccato,
            "flowing" => RhythmPattern::Flowing,
            _ => RhythmPattern::Uniform,
        }
    }
}

/// Bolding policy for repeated key words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EmphasisStrategy {
    #[default]
    Minimal,
    Strategic,
    Emotional,
}

impl From<String> for EmphasisStrategy {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "strategic" => EmphasisStrategy::Strategic,
            "emotional" => EmphasisStrategy::Emotional,
            _ => EmphasisStrategy::Minimal,
        }
    }
}

impl EmphasisStrategy {
    /// Whether the `n`-th (1-based) occurrence of a key word gets bolded.
    pub fn should_emphasize(self, n: usize) -> bool {
        match self {
            EmphasisStrategy::Minimal => false,
            EmphasisStrategy::Strategic => n % 3 == 0,
            EmphasisStrategy::Emotional => n == 1 || n % 2 == 0,
        }
    }
}

/// Stylistic knobs for one humanization call.
///
/// Field names serialize in camelCase (`logicStyle`, `removeAIPhrases`, …) so the
/// same JSON the UI sends can be fed straight in. Missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HumanizationConfig {
    pub enabled: bool,
    /// 0–100; anything outside is clamped on the way in.
    #[serde(deserialize_with = "de_intensity")]
    pub intensity: u8,
    pub logic_style: LogicStyle,
    pub rhythm_pattern: RhythmPattern,
    pub emphasis_strategy: EmphasisStrategy,
    /// Merged into the conversational pool.
    pub verbal_tics: Vec<String>,
    /// Merged into the emphasis / emotional pools.
    pub personal_phrases: Vec<String>,
    #[serde(rename = "removeAIPhrases", alias = "removeAiPhrases")]
    pub remove_ai_phrases: bool,
    pub add_opinions: bool,
    pub vary_paragraph_length: bool,
    pub use_conversational_tone: bool,
}

impl Default for HumanizationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: DEFAULT_INTENSITY,
            logic_style: LogicStyle::Spiral,
            rhythm_pattern: RhythmPattern::Varied,
            emphasis_strategy: EmphasisStrategy::Strategic,
            verbal_tics: HUMAN_CONVERSATIONAL.iter().map(|s| s.to_string()).collect(),
            personal_phrases: HUMAN_EMPHASIS.iter().map(|s| s.to_string()).collect(),
            remove_ai_phrases: true,
            add_opinions: true,
            vary_paragraph_length: true,
            use_conversational_tone: true,
        }
    }
}

impl HumanizationConfig {
    /// Intensity clamped to `[0,100]`.
    pub fn intensity(&self) -> u8 {
        self.intensity.min(MAX_INTENSITY)
    }

    /// Intensity normalized to `[0,1]`.
    pub fn normalized_intensity(&self) -> f64 {
        f64::from(self.intensity()) / 100.0
    }

    /// Copy with clamped intensity and cleaned phrase lists
    /// (trimmed, empties dropped, duplicates removed keeping first occurrence).
    pub fn sanitized(&self) -> Self {
        Self {
            intensity: self.intensity(),
            verbal_tics: clean_phrases(&self.verbal_tics),
            personal_phrases: clean_phrases(&self.personal_phrases),
            ..self.clone()
        }
    }

    /// All caller-supplied phrases, verbal tics first.
    pub fn user_phrases(&self) -> impl Iterator<Item = &str> {
        self.verbal_tics
            .iter()
            .chain(self.personal_phrases.iter())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

fn clean_phrases(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim();
        if !t.is_empty() && !out.iter().any(|o| o == t) {
            out.push(t.to_string());
        }
    }
    out
}

fn de_intensity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Num {
        Int(i64),
        Float(f64),
    }
    let v = match Num::deserialize(deserializer)? {
        Num::Int(i) => i.clamp(0, i64::from(MAX_INTENSITY)) as u8,
        Num::Float(f) if f.is_nan() => 0,
        Num::Float(f) => f.round().clamp(0.0, f64::from(MAX_INTENSITY)) as u8,
    };
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_baseline() {
        let c = HumanizationConfig::default();
        assert!(c.enabled);
        assert_eq!(c.intensity, 70);
        assert_eq!(c.logic_style, LogicStyle::Spiral);
        assert_eq!(c.rhythm_pattern, RhythmPattern::Varied);
        assert_eq!(c.emphasis_strategy, EmphasisStrategy::Strategic);
        assert_eq!(c.verbal_tics.len(), HUMAN_CONVERSATIONAL.len());
        assert!(c.remove_ai_phrases && c.add_opinions);
        assert!(c.vary_paragraph_length && c.use_conversational_tone);
    }

    #[test]
    fn camel_case_json_with_out_of_range_values() {
        let raw = r#"{
            "intensity": 250,
            "logicStyle": "zigzag",
            "rhythmPattern": "Staccato",
            "emphasisStrategy": "loud",
            "removeAIPhrases": false
        }"#;
        let c: HumanizationConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(c.intensity, 100);
        assert_eq!(c.logic_style, LogicStyle::Linear);
        assert_eq!(c.rhythm_pattern, RhythmPattern::Staccato);
        assert_eq!(c.emphasis_strategy, EmphasisStrategy::Minimal);
        assert!(!c.remove_ai_phrases);
        // untouched fields keep defaults
        assert!(c.add_opinions);
    }

    #[test]
    fn negative_and_fractional_intensity_clamp() {
        let c: HumanizationConfig = serde_json::from_str(r#"{"intensity": -5}"#).unwrap();
        assert_eq!(c.intensity, 0);
        let c: HumanizationConfig = serde_json::from_str(r#"{"intensity": 42.6}"#).unwrap();
        assert_eq!(c.intensity, 43);
    }

    #[test]
    fn serializes_with_ui_field_names() {
        let v = serde_json::to_value(HumanizationConfig::default()).unwrap();
        assert_eq!(v["logicStyle"], "spiral");
        assert_eq!(v["removeAIPhrases"], true);
        assert!(v.get("verbalTics").is_some());
    }

    #[test]
    fn sanitized_cleans_phrase_lists() {
        let c = HumanizationConfig {
            intensity: 180,
            verbal_tics: vec![" 說實話 ".into(), "".into(), "說實話".into(), "a+b(".into()],
            ..Default::default()
        };
        let s = c.sanitized();
        assert_eq!(s.intensity, 100);
        assert_eq!(s.verbal_tics, vec!["說實話".to_string(), "a+b(".to_string()]);
    }

    #[test]
    fn emphasis_schedule() {
        let strategic: Vec<usize> = (1..=9)
            .filter(|&n| EmphasisStrategy::Strategic.should_emphasize(n))
            .collect();
        assert_eq!(strategic, vec![3, 6, 9]);
        let emotional: Vec<usize> = (1..=6)
            .filter(|&n| EmphasisStrategy::Emotional.should_emphasize(n))
            .collect();
        assert_eq!(emotional, vec![1, 2, 4, 6]);
        assert!(!(1..=10).any(|n| EmphasisStrategy::Minimal.should_emphasize(n)));
    }
}
