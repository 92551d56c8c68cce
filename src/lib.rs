// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod phrases;
pub mod probability;
pub mod random;
pub mod segment;

pub mod passes;
pub mod humanize;
pub mod score;

pub mod detect;
pub mod optimize;
pub mod generation;

pub mod api;
pub mod devlog;
pub mod metrics;

// ---- Re-exports for stable public API ----
pub use crate::config::{EmphasisStrategy, HumanizationConfig, LogicStyle, RhythmPattern};
pub use crate::detect::{detect_ai_flavor, AiFlavorReport};
pub use crate::generation::{generate_humanized, GenerationParams, StaticGenerator, TextGenerator};
pub use crate::humanize::{
    humanize, HumanizationResult, HumanizeService, TransformationKind, TransformationLogEntry,
};
pub use crate::optimize::generate_optimization_suggestions;
pub use crate::probability::{probabilities, Probabilities};
pub use crate::random::{FixedRandom, RandomSource, SeededRandom};
pub use crate::score::{calculate_humanity_score, HumanityScore, ScoreBreakdown};
