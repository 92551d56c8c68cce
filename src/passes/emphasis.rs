//! Bold selected occurrences of the document's key words.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::PassContext;
use crate::config::EmphasisStrategy;
use crate::humanize::TransformationKind;
use crate::phrases::is_ai_phrase;

static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}]+|[a-zA-Z]+").expect("word token regex"));

pub const MAX_KEY_WORDS: usize = 10;
const MIN_KEY_WORD_CHARS: usize = 3;

/// Most frequent tokens of at least three characters, ties broken by first occurrence.
pub fn extract_key_words(text: &str) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for m in WORD_TOKEN.find_iter(text) {
        let w = m.as_str();
        if w.chars().count() < MIN_KEY_WORD_CHARS || is_ai_phrase(w) {
            continue;
        }
        let n = freq.entry(w).or_insert(0);
        if *n == 0 {
            order.push(w);
        }
        *n += 1;
    }
    // stable: equal counts keep document order
    order.sort_by(|a, b| freq[b].cmp(&freq[a]));
    order
        .into_iter()
        .take(MAX_KEY_WORDS)
        .map(str::to_string)
        .collect()
}

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let strategy = ctx.config.emphasis_strategy;
    if strategy == EmphasisStrategy::Minimal {
        return text.to_string();
    }

    let mut out = text.to_string();
    let mut hits = 0usize;
    for word in extract_key_words(text) {
        let mut seen = 0usize;
        let mut rebuilt = String::with_capacity(out.len() + 8);
        let mut last = 0;
        for m in WORD_TOKEN.find_iter(&out) {
            if m.as_str() != word {
                continue;
            }
            seen += 1;
            if !strategy.should_emphasize(seen) {
                continue;
            }
            rebuilt.push_str(&out[last..m.start()]);
            rebuilt.push_str("**");
            rebuilt.push_str(m.as_str());
            rebuilt.push_str("**");
            last = m.end();
            hits += 1;
            ctx.record(
                TransformationKind::EmphasisAdded,
                word.as_str(),
                format!("**{word}**"),
                format!("Strategic emphasis on key word \"{word}\""),
            );
        }
        rebuilt.push_str(&out[last..]);
        out = rebuilt;
    }

    debug!(target: "humanize", pass = "emphasis", hits, "pass done");
    out
}
