//! Transformation passes.
//!
//! Each pass is a function `apply(&str, &mut PassContext) -> String`: it reads the
//! config and probabilities, draws through the shared dice, and appends to the log.
//! Passes never fail; input without sentences or paragraphs comes back unchanged.

pub mod emphasis;
pub mod logic;
pub mod opinions;
pub mod personality;
pub mod phrase_removal;
pub mod rhythm;
pub mod structural;
pub mod verbal_tics;

use crate::config::HumanizationConfig;
use crate::humanize::{TransformationKind, TransformationLog};
use crate::phrases::{human_pool, HumanCategory};
use crate::probability::Probabilities;
use crate::random::{Dice, RandomSource};

/// Per-call scratch state threaded through the pipeline.
pub struct PassContext<'a> {
    pub config: &'a HumanizationConfig,
    pub probs: Probabilities,
    pub dice: Dice<'a>,
    pub log: &'a mut TransformationLog,
}

impl<'a> PassContext<'a> {
    pub fn new(
        config: &'a HumanizationConfig,
        random: &'a mut dyn RandomSource,
        log: &'a mut TransformationLog,
    ) -> Self {
        Self {
            config,
            probs: Probabilities::for_intensity(f64::from(config.intensity())),
            dice: Dice::new(random),
            log,
        }
    }

    pub fn record(
        &mut self,
        kind: TransformationKind,
        original: impl Into<String>,
        transformed: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.log.push(kind, original, transformed, reason);
    }
}

/// Built-in pool for `category` plus whichever user phrases feed it.
pub fn pool(category: HumanCategory, config: &HumanizationConfig) -> Vec<&str> {
    let extras: &[String] = match category {
        HumanCategory::Conversational => &config.verbal_tics,
        HumanCategory::Emphasis | HumanCategory::Emotional => &config.personal_phrases,
        HumanCategory::Transitions | HumanCategory::Questions => &[],
    };
    human_pool(category, extras)
}
