//! Paragraph-level logic structure rewrite, selected by `logicStyle`.
//!
//! - `linear`: passthrough
//! - `spiral`: with more than 3 paragraphs, swap paragraphs 0 and 1; nothing else moves
//! - `conversational`: long paragraphs may get a parenthetical aside after them
//! - `storytelling`: a narrative hook may follow any paragraph but the last

use tracing::debug;

use super::PassContext;
use crate::config::LogicStyle;
use crate::humanize::TransformationKind;
use crate::phrases::{CONVERSATIONAL_ASIDES, NARRATIVE_HOOKS};
use crate::segment::{join_paragraphs, paragraphs};

pub const SPIRAL_MIN_PARAGRAPHS: usize = 4;
const ASIDE_MIN_CHARS: usize = 100;
const ASIDE_PROBABILITY: f64 = 0.3;
const HOOK_PROBABILITY: f64 = 0.4;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let style = ctx.config.logic_style;
    match style {
        LogicStyle::Linear => text.to_string(),
        LogicStyle::Spiral => spiral(text, ctx),
        LogicStyle::Conversational => conversational(text, ctx),
        LogicStyle::Storytelling => storytelling(text, ctx),
    }
}

fn spiral(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut paras = paragraphs(text);
    if paras.len() < SPIRAL_MIN_PARAGRAPHS {
        return text.to_string();
    }
    paras.swap(0, 1);
    ctx.record(
        TransformationKind::StructureChange,
        "Linear paragraph order",
        "Spiral structure",
        "Rearranged paragraphs for spiral narrative flow",
    );
    join_paragraphs(&paras)
}

fn conversational(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut out: Vec<String> = Vec::new();
    for para in paragraphs(text) {
        out.push(para.to_string());
        if para.chars().count() <= ASIDE_MIN_CHARS || !ctx.dice.chance(ASIDE_PROBABILITY) {
            continue;
        }
        if let Some(aside) = ctx.dice.pick(CONVERSATIONAL_ASIDES) {
            let line = format!("（{aside}）");
            ctx.record(
                TransformationKind::StructureChange,
                "",
                line.as_str(),
                "Added conversational aside after a long paragraph",
            );
            out.push(line);
        }
    }
    debug!(target: "humanize", pass = "logic", style = "conversational", "pass done");
    join_paragraphs(&out)
}

fn storytelling(text: &str, ctx: &mut PassContext<'_>) -> String {
    let paras = paragraphs(text);
    let last = paras.len().saturating_sub(1);
    let mut out: Vec<String> = Vec::with_capacity(paras.len() * 2);
    for (i, para) in paras.into_iter().enumerate() {
        out.push(para.to_string());
        if i == last || !ctx.dice.chance(HOOK_PROBABILITY) {
            continue;
        }
        if let Some(hook) = ctx.dice.pick(NARRATIVE_HOOKS) {
            ctx.record(
                TransformationKind::StructureChange,
                "",
                hook,
                "Inserted narrative hook between paragraphs",
            );
            out.push(hook.to_string());
        }
    }
    debug!(target: "humanize", pass = "logic", style = "storytelling", "pass done");
    join_paragraphs(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HumanizationConfig;
    use crate::passes::testutil::run_forced;

    fn cfg(style: LogicStyle) -> HumanizationConfig {
        HumanizationConfig {
            logic_style: style,
            ..Default::default()
        }
    }

    #[test]
    fn spiral_is_byte_identical_up_to_three_paragraphs() {
        for text in ["一", "一\n\n二", "一\n\n二\n\n三"] {
            let (out, log) = run_forced(&cfg(LogicStyle::Spiral), text, apply);
            assert_eq!(out, text);
            assert!(log.is_empty());
        }
    }

    #[test]
    fn spiral_swaps_only_the_first_two() {
        let (out, log) = run_forced(&cfg(LogicStyle::Spiral), "A\n\nB\n\nC\n\nD\n\nE", apply);
        assert_eq!(out, "B\n\nA\n\nC\n\nD\n\nE");
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].kind, TransformationKind::StructureChange);
    }

    #[test]
    fn linear_is_passthrough() {
        let text = "A\n\nB\n\nC\n\nD";
        let (out, log) = run_forced(&cfg(LogicStyle::Linear), text, apply);
        assert_eq!(out, text);
        assert!(log.is_empty());
    }

    #[test]
    fn conversational_asides_follow_long_paragraphs_only() {
        let long = "長".repeat(120);
        let text = format!("{long}\n\n短段落");
        let (out, log) = run_forced(&cfg(LogicStyle::Conversational), &text, apply);
        let paras: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[1], format!("（{}）", CONVERSATIONAL_ASIDES[0]));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn storytelling_never_hooks_after_last_paragraph() {
        let (out, log) = run_forced(&cfg(LogicStyle::Storytelling), "甲\n\n乙", apply);
        assert_eq!(out, format!("甲\n\n{}\n\n乙", NARRATIVE_HOOKS[0]));
        assert_eq!(log.len(), 1);
    }
}
