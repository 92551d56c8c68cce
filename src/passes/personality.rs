//! Small personality touches: an aside after the opening sentence of long
//! paragraphs, and trailing ellipses on long clauses. Each effect is switched on
//! once per call before any per-site roll.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::PassContext;
use crate::humanize::TransformationKind;
use crate::phrases::PERSONALITY_ASIDES;
use crate::segment::{first_terminator_end, join_paragraphs, paragraphs};

static LONG_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^。！？!?.]{50,}[。.]").expect("long clause regex"));

const ASIDE_MIN_CHARS: usize = 100;
const ASIDE_PROBABILITY: f64 = 0.2;
const ELLIPSIS_PROBABILITY: f64 = 0.1;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let i = ctx.config.normalized_intensity();
    let mut out = text.to_string();
    if ctx.dice.chance(i) {
        out = asides(&out, ctx);
    }
    if ctx.dice.chance(i * 0.5) {
        out = ellipses(&out, ctx);
    }
    debug!(target: "humanize", pass = "personality", "pass done");
    out
}

fn asides(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut out: Vec<String> = Vec::new();
    for para in paragraphs(text) {
        if para.chars().count() <= ASIDE_MIN_CHARS || !ctx.dice.chance(ASIDE_PROBABILITY) {
            out.push(para.to_string());
            continue;
        }
        let (Some(at), Some(aside)) = (first_terminator_end(para), ctx.dice.pick(PERSONALITY_ASIDES))
        else {
            out.push(para.to_string());
            continue;
        };
        let inserted = format!("（{aside}）");
        ctx.record(
            TransformationKind::PhraseInjection,
            "",
            inserted.as_str(),
            "Added personality aside after opening sentence",
        );
        out.push(format!("{}{inserted}{}", &para[..at], &para[at..]));
    }
    join_paragraphs(&out)
}

fn ellipses(text: &str, ctx: &mut PassContext<'_>) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in LONG_CLAUSE.find_iter(text) {
        if !ctx.dice.chance(ELLIPSIS_PROBABILITY) {
            continue;
        }
        let clause = m.as_str();
        let stop_len = clause.chars().last().map(char::len_utf8).unwrap_or(0);
        let body = &clause[..clause.len() - stop_len];
        out.push_str(&text[last..m.start()]);
        out.push_str(body);
        out.push_str("...");
        last = m.end();
        ctx.record(
            TransformationKind::StructureChange,
            clause,
            format!("{body}..."),
            "Trailed off a long clause with an ellipsis",
        );
    }
    out.push_str(&text[last..]);
    out
}
