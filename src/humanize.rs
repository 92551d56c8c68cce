//! Humanization pipeline: runs the passes in fixed order and scores the result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HumanizationConfig;
use crate::passes::{self, PassContext};
use crate::random::{RandomSource, SeededRandom};
use crate::score::{calculate_humanity_score, HumanityScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationKind {
    PhraseRemoval,
    PhraseInjection,
    StructureChange,
    OpinionAdded,
    EmphasisAdded,
}

impl TransformationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransformationKind::PhraseRemoval => "phrase_removal",
            TransformationKind::PhraseInjection => "phrase_injection",
            TransformationKind::StructureChange => "structure_change",
            TransformationKind::OpinionAdded => "opinion_added",
            TransformationKind::EmphasisAdded => "emphasis_added",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationLogEntry {
    #[serde(rename = "type")]
    pub kind: TransformationKind,
    pub original: String,
    pub transformed: String,
    pub reason: String,
}

/// Append-only record of the edits made during one call, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationLog {
    entries: Vec<TransformationLogEntry>,
}

impl TransformationLog {
    pub fn push(
        &mut self,
        kind: TransformationKind,
        original: impl Into<String>,
        transformed: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.entries.push(TransformationLogEntry {
            kind,
            original: original.into(),
            transformed: transformed.into(),
            reason: reason.into(),
        });
    }

    pub fn entries(&self) -> &[TransformationLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<TransformationLogEntry> {
        self.entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizationResult {
    pub original_content: String,
    pub humanized_content: String,
    pub transformations: Vec<TransformationLogEntry>,
    pub humanity_score: HumanityScore,
}

impl HumanizationResult {
    /// Number of log entries of the given kind.
    pub fn count_of(&self, kind: TransformationKind) -> usize {
        self.transformations
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }
}

/// Holds a config and a random source; reusable across calls.
///
/// Each [`humanize`](HumanizeService::humanize) call starts from an empty log, so
/// no state leaks between calls apart from the random stream advancing.
pub struct HumanizeService {
    config: HumanizationConfig,
    random: Box<dyn RandomSource>,
}

impl HumanizeService {
    /// Service backed by an OS-seeded random source.
    pub fn new(config: HumanizationConfig) -> Self {
        Self::with_random(config, Box::new(SeededRandom::from_os()))
    }

    pub fn with_random(config: HumanizationConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            config: config.sanitized(),
            random,
        }
    }

    pub fn config(&self) -> &HumanizationConfig {
        &self.config
    }

    pub fn humanize(&mut self, content: &str) -> HumanizationResult {
        let config = &self.config;
        let mut log = TransformationLog::default();

        let humanized = if config.enabled {
            let mut ctx = PassContext::new(config, self.random.as_mut(), &mut log);
            run_pipeline(content, &mut ctx)
        } else {
            debug!(target: "humanize", "disabled, passthrough");
            content.to_string()
        };

        let humanity_score = calculate_humanity_score(&humanized, config);
        let result = HumanizationResult {
            original_content: content.to_string(),
            humanized_content: humanized,
            transformations: log.into_entries(),
            humanity_score,
        };

        crate::metrics::record_humanize(&result);
        crate::devlog::log_humanize_event(
            content,
            config.intensity(),
            result.transformations.len(),
            result.humanity_score.overall,
        );
        result
    }
}

fn run_pipeline(content: &str, ctx: &mut PassContext<'_>) -> String {
    let config = ctx.config;
    let mut text = content.to_string();

    if config.remove_ai_phrases {
        text = passes::phrase_removal::apply(&text, ctx);
    }
    if config.use_conversational_tone {
        text = passes::verbal_tics::apply(&text, ctx);
    }
    text = passes::logic::apply(&text, ctx);
    if config.add_opinions {
        text = passes::opinions::apply(&text, ctx);
    }
    if config.vary_paragraph_length {
        text = passes::rhythm::apply(&text, ctx);
    }
    text = passes::emphasis::apply(&text, ctx);
    text = passes::personality::apply(&text, ctx);
    passes::structural::apply(&text, ctx)
}

/// One-shot humanization with an OS-seeded random source.
pub fn humanize(content: &str, config: &HumanizationConfig) -> HumanizationResult {
    HumanizeService::new(config.clone()).humanize(content)
}
