//! Attach short opinion clauses to factual-looking sentences.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::PassContext;
use crate::humanize::TransformationKind;
use crate::phrases::OPINIONS;
use crate::segment::{split_keep_stops, Sentence};

static FACTUAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d|[%％]|百分|研究|數據|統計|報告|顯示|(?i:\b(?:research|data|statistics|report|shows)\b)")
        .expect("factual regex")
});

/// Cheap lexical guess at whether a sentence states a fact or figure.
pub fn is_factual(sentence: &str) -> bool {
    FACTUAL.is_match(sentence)
}

/// Tokens alternate body/stop, so a stride of four visits sentences 0, 2, 4, ….
const ELIGIBLE_STRIDE: usize = 4;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut tokens = split_keep_stops(text);
    let mut hits = 0usize;

    for i in (0..tokens.len()).step_by(ELIGIBLE_STRIDE) {
        if tokens[i].trim().is_empty() || !is_factual(&tokens[i]) {
            continue;
        }
        if !ctx.dice.chance(ctx.probs.opinion) {
            continue;
        }
        let Some(opinion) = ctx.dice.pick(OPINIONS) else {
            continue;
        };

        match tokens.get(i + 1).cloned() {
            Some(stop) => {
                let mut unit = Sentence {
                    body: tokens[i].clone(),
                    stop,
                };
                let before = unit.render();
                unit.push_after_stop(&format!("{opinion}。"));
                ctx.record(
                    TransformationKind::OpinionAdded,
                    before,
                    unit.render(),
                    "Added personal opinion to factual statement",
                );
                tokens[i + 1] = unit.stop;
            }
            // trailing fragment with no stop of its own
            None => {
                let after = format!("{}，{opinion}", tokens[i]);
                ctx.record(
                    TransformationKind::OpinionAdded,
                    tokens[i].as_str(),
                    after.as_str(),
                    "Added personal opinion to factual statement",
                );
                tokens[i] = after;
            }
        }
        hits += 1;
    }

    debug!(target: "humanize", pass = "opinions", hits, "pass done");
    tokens.concat()
}
