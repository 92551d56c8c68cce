//! Paragraph-length shaping, selected by `rhythmPattern`.

use tracing::debug;

use super::PassContext;
use crate::config::RhythmPattern;
use crate::humanize::TransformationKind;
use crate::segment::{join_paragraphs, join_sentences, paragraphs, sentences, Sentence};

const UNIFORM_MAX_SENTENCES: usize = 8;
const VARIED_SPLIT_PROBABILITY: f64 = 0.2;
const VARIED_PEEL_PROBABILITY: f64 = 0.1;
const VARIED_PEEL_MIN_CHARS: usize = 50;
const FLOWING_MERGE_PROBABILITY: f64 = 0.3;
const FLOWING_MAX_CHARS: usize = 200;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let paras: Vec<&str> = paragraphs(text)
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();

    let pattern = ctx.config.rhythm_pattern;
    let mut out: Vec<String> = Vec::with_capacity(paras.len());
    for para in paras {
        match pattern {
            RhythmPattern::Uniform => uniform(para, ctx, &mut out),
            RhythmPattern::Varied => varied(para, ctx, &mut out),
            RhythmPattern::Staccato => staccato(para, ctx, &mut out),
            RhythmPattern::Flowing => flowing(para, ctx, &mut out),
        }
    }
    out.retain(|p| !p.trim().is_empty());

    debug!(target: "humanize", pass = "rhythm", paragraphs = out.len(), "pass done");
    join_paragraphs(&out)
}

fn uniform(para: &str, ctx: &mut PassContext<'_>, out: &mut Vec<String>) {
    let units = sentences(para);
    if units.len() > UNIFORM_MAX_SENTENCES {
        split_in_half(para, &units, ctx, out);
    } else {
        out.push(para.to_string());
    }
}

fn varied(para: &str, ctx: &mut PassContext<'_>, out: &mut Vec<String>) {
    let units = sentences(para);
    if ctx.dice.chance(VARIED_SPLIT_PROBABILITY) && units.len() > 2 {
        split_in_half(para, &units, ctx, out);
    } else if ctx.dice.chance(VARIED_PEEL_PROBABILITY)
        && para.chars().count() > VARIED_PEEL_MIN_CHARS
        && units.len() > 1
    {
        let head = units[0].render().trim_end().to_string();
        let rest = join_sentences(&units[1..]).trim_start().to_string();
        ctx.record(
            TransformationKind::StructureChange,
            para,
            format!("{head}\n\n{rest}"),
            "Peeled opening sentence into a short paragraph",
        );
        out.push(head);
        out.push(rest);
    } else {
        out.push(para.to_string());
    }
}

fn staccato(para: &str, ctx: &mut PassContext<'_>, out: &mut Vec<String>) {
    let pieces: Vec<String> = sentences(para)
        .iter()
        .map(|s| s.render().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if pieces.len() > 1 {
        ctx.record(
            TransformationKind::StructureChange,
            para,
            join_paragraphs(&pieces),
            "Broke paragraph into one sentence per line",
        );
    }
    out.extend(pieces);
}

fn flowing(para: &str, ctx: &mut PassContext<'_>, out: &mut Vec<String>) {
    let eligible = !out.is_empty() && para.chars().count() < FLOWING_MAX_CHARS;
    if eligible && ctx.dice.chance(FLOWING_MERGE_PROBABILITY) {
        if let Some(prev) = out.last_mut() {
            prev.push(' ');
            prev.push_str(para);
            ctx.record(
                TransformationKind::StructureChange,
                para,
                "",
                "Merged short paragraph into the previous one",
            );
            return;
        }
    }
    out.push(para.to_string());
}

fn split_in_half(para: &str, units: &[Sentence], ctx: &mut PassContext<'_>, out: &mut Vec<String>) {
    let mid = units.len() / 2;
    let first = join_sentences(&units[..mid]).trim_end().to_string();
    let second = join_sentences(&units[mid..]).trim_start().to_string();
    ctx.record(
        TransformationKind::StructureChange,
        para,
        format!("{first}\n\n{second}"),
        "Split paragraph at its midpoint",
    );
    out.push(first);
    out.push(second);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HumanizationConfig;
    use crate::passes::testutil::{run_forced, run_with};
    use crate::random::FixedRandom;

    fn cfg(pattern: RhythmPattern) -> HumanizationConfig {
        HumanizationConfig {
            rhythm_pattern: pattern,
            ..Default::default()
        }
    }

    #[test]
    fn uniform_splits_only_long_paragraphs() {
        let long = "一。二。三。四。五。六。七。八。九。十。";
        let (out, log) = run_forced(&cfg(RhythmPattern::Uniform), long, apply);
        assert_eq!(out, "一。二。三。四。五。\n\n六。七。八。九。十。");
        assert_eq!(log.len(), 1);

        let short = "一。二。三。";
        let (out, log) = run_forced(&cfg(RhythmPattern::Uniform), short, apply);
        assert_eq!(out, short);
        assert!(log.is_empty());
    }

    #[test]
    fn varied_split_wins_over_peel() {
        let (out, log) = run_forced(&cfg(RhythmPattern::Varied), "甲。乙。丙。丁。", apply);
        assert_eq!(out, "甲。乙。\n\n丙。丁。");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn varied_with_closed_dice_only_drops_blank_paragraphs() {
        let text = "甲。乙。丙。\n\n   \n\n丁。";
        let (out, log) = run_with(&cfg(RhythmPattern::Varied), text, &mut FixedRandom::never(), apply);
        assert_eq!(out, "甲。乙。丙。\n\n丁。");
        assert!(log.is_empty());
    }

    #[test]
    fn staccato_one_sentence_per_paragraph() {
        let (out, _) = run_forced(&cfg(RhythmPattern::Staccato), "A. B! C?\n\nD.", apply);
        assert_eq!(out, "A.\n\nB!\n\nC?\n\nD.");
    }

    #[test]
    fn flowing_never_merges_the_first_paragraph() {
        let (out, log) = run_forced(&cfg(RhythmPattern::Flowing), "甲。\n\n乙。\n\n丙。", apply);
        assert_eq!(out, "甲。 乙。 丙。");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn empty_input_stays_empty() {
        for pattern in [
            RhythmPattern::Uniform,
            RhythmPattern::Varied,
            RhythmPattern::Staccato,
            RhythmPattern::Flowing,
        ] {
            let (out, log) = run_forced(&cfg(pattern), "", apply);
            assert_eq!(out, "");
            assert!(log.is_empty());
        }
    }
}
