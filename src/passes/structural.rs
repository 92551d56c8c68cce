//! Structural overlay run last in the pipeline.
//!
//! Four sub-effects in fixed order, every candidate site rolling against the
//! structural probability: self-corrections, mid-paragraph topic shifts, emotional
//! punctuation, bracketed tangents.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::PassContext;
use crate::humanize::TransformationKind;
use crate::phrases::{EMPHASIS_ADVERBS, SELF_CORRECTIONS, TANGENTS, TOPIC_SHIFTS};
use crate::segment::{join_paragraphs, join_sentences, paragraphs, sentences};

static CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^。！？!?.]+[。.]").expect("clause regex"));

static ADVERB: Lazy<Regex> = Lazy::new(|| {
    let alts: Vec<String> = EMPHASIS_ADVERBS
        .iter()
        .map(|a| {
            if a.is_ascii() {
                format!(r"\b{}\b", regex::escape(a))
            } else {
                regex::escape(a)
            }
        })
        .collect();
    Regex::new(&format!("(?i){}", alts.join("|"))).expect("adverb regex")
});

const CORRECTION_MIN_CHARS: usize = 30;
const TOPIC_SHIFT_MIN_CHARS: usize = 100;
const ELLIPSIS_MIN_CHARS: usize = 50;
const ELLIPSIS_SHARE: f64 = 0.3;
const EXCLAIM_SHARE: f64 = 0.4;
const TANGENT_MIN_CHARS: usize = 40;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let out = incomplete_thoughts(text, ctx);
    let out = topic_shifts(&out, ctx);
    let out = emotional_punctuation(&out, ctx);
    let out = tangents(&out, ctx);
    debug!(target: "humanize", pass = "structural", "pass done");
    out
}

fn incomplete_thoughts(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut units = sentences(text);
    let eligible = units.len().saturating_sub(2);
    for unit in units.iter_mut().take(eligible) {
        if unit.len_chars() <= CORRECTION_MIN_CHARS || !ctx.dice.chance(ctx.probs.structural) {
            continue;
        }
        let Some(correction) = ctx.dice.pick(SELF_CORRECTIONS) else {
            continue;
        };
        unit.push_after_stop(correction);
        ctx.record(
            TransformationKind::StructureChange,
            "",
            correction,
            "Added self-correction after a long sentence",
        );
    }
    join_sentences(&units)
}

fn topic_shifts(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut out: Vec<String> = Vec::new();
    for (idx, para) in paragraphs(text).into_iter().enumerate() {
        let mut units = sentences(para);
        let eligible = idx >= 1 && para.chars().count() > TOPIC_SHIFT_MIN_CHARS && units.len() >= 2;
        if !eligible || !ctx.dice.chance(ctx.probs.structural) {
            out.push(para.to_string());
            continue;
        }
        let Some(marker) = ctx.dice.pick(TOPIC_SHIFTS) else {
            out.push(para.to_string());
            continue;
        };
        let mid = units.len() / 2;
        units[mid].body = format!("{marker}{}", units[mid].body.trim_start());
        ctx.record(
            TransformationKind::StructureChange,
            "",
            marker,
            "Inserted topic-shift marker mid-paragraph",
        );
        out.push(join_sentences(&units));
    }
    join_paragraphs(&out)
}

fn emotional_punctuation(text: &str, ctx: &mut PassContext<'_>) -> String {
    let s = ctx.probs.structural;
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in CLAUSE.find_iter(text) {
        let clause = m.as_str();
        let stop = clause.chars().last().unwrap_or('。');
        let body = &clause[..clause.len() - stop.len_utf8()];

        let replacement = if body.chars().count() >= ELLIPSIS_MIN_CHARS
            && ctx.dice.chance(s)
            && ctx.dice.chance(ELLIPSIS_SHARE)
        {
            Some(("...", "Trailed off a long clause"))
        } else if ADVERB.is_match(body) && ctx.dice.chance(s) && ctx.dice.chance(EXCLAIM_SHARE) {
            let bang = if stop == '.' { "!" } else { "！" };
            Some((bang, "Exclamation for emphasized clause"))
        } else {
            None
        };

        if let Some((mark, reason)) = replacement {
            let changed = format!("{body}{mark}");
            out.push_str(&text[last..m.start()]);
            out.push_str(&changed);
            last = m.end();
            ctx.record(TransformationKind::EmphasisAdded, clause, changed, reason);
        }
    }
    out.push_str(&text[last..]);
    out
}

fn tangents(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut units = sentences(text);
    let eligible = units.len().saturating_sub(3);
    for unit in units.iter_mut().take(eligible) {
        if unit.len_chars() <= TANGENT_MIN_CHARS || !ctx.dice.chance(ctx.probs.structural) {
            continue;
        }
        let Some(tangent) = ctx.dice.pick(TANGENTS) else {
            continue;
        };
        unit.push_after_stop(tangent);
        ctx.record(
            TransformationKind::StructureChange,
            "",
            tangent,
            "Added tangential aside",
        );
    }
    join_sentences(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HumanizationConfig;
    use crate::passes::testutil::{run_forced, run_with};
    use crate::random::FixedRandom;

    fn long(c: &str, n: usize) -> String {
        c.repeat(n)
    }

    #[test]
    fn self_corrections_skip_the_last_two_sentences() {
        let cfg = HumanizationConfig::default();
        let (a, b, c, d) = (long("甲", 31), long("乙", 31), long("丙", 31), long("丁", 31));
        let text = format!("{a}。{b}。{c}。{d}。");
        let (out, log) = run_forced(&cfg, &text, incomplete_thoughts);
        let sc = SELF_CORRECTIONS[0];
        assert_eq!(out, format!("{a}。{sc}{b}。{sc}{c}。{d}。"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn topic_shift_lands_on_the_middle_sentence_of_later_paragraphs() {
        let cfg = HumanizationConfig::default();
        let (a, b) = (long("甲", 60), long("乙", 60));
        let text = format!("{a}。{b}。\n\n{a}。{b}。");
        let (out, log) = run_forced(&cfg, &text, topic_shifts);
        let marker = TOPIC_SHIFTS[0];
        assert_eq!(out, format!("{a}。{b}。\n\n{a}。{marker}{b}。"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn punctuation_follows_clause_content() {
        let cfg = HumanizationConfig::default();
        let (out, log) = run_forced(&cfg, "這真的很好。It is very good. Every day.", emotional_punctuation);
        assert_eq!(out, "這真的很好！It is very good! Every day.");
        assert_eq!(log.len(), 2);
        assert!(log.entries().iter().all(|e| e.kind == TransformationKind::EmphasisAdded));

        let text = format!("{}。", long("長", 60));
        let (out, _) = run_forced(&cfg, &text, emotional_punctuation);
        assert_eq!(out, format!("{}...", long("長", 60)));
    }

    #[test]
    fn tangents_skip_the_last_three_sentences() {
        let cfg = HumanizationConfig::default();
        let s = long("字", 41);
        let text = format!("{s}。{s}。{s}。{s}。");
        let (out, log) = run_forced(&cfg, &text, tangents);
        let t = TANGENTS[0];
        assert_eq!(out, format!("{s}。{t}{s}。{s}。{s}。"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn closed_dice_is_identity() {
        let cfg = HumanizationConfig::default();
        let s = long("字", 80);
        let text = format!("{s}。真的{s}。\n\n{s}。{s}。{s}。");
        let (out, log) = run_with(&cfg, &text, &mut FixedRandom::never(), apply);
        assert_eq!(out, text);
        assert!(log.is_empty());
    }
}
