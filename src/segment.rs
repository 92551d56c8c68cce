//! Approximate text segmentation.
//!
//! Sentences end at `。！？!?.` (plus any trailing whitespace); paragraphs are separated
//! by a blank line (`"\n\n"`). Decimals, abbreviations and quotes are not special-cased.

use once_cell::sync::Lazy;
use regex::Regex;

pub const PARAGRAPH_BREAK: &str = "\n\n";

static SENTENCE_STOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[。！？!?.]\s*").expect("sentence stop regex"));

static TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[。！？!?]|\.(?:\s|$)").expect("terminator regex"));

/// One sentence-like unit: body text plus the stop that closed it
/// (punctuation and trailing whitespace). The last unit may have an empty stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub body: String,
    pub stop: String,
}

impl Sentence {
    /// Body length in characters.
    pub fn len_chars(&self) -> usize {
        self.body.chars().count()
    }

    /// Split the stop into its punctuation mark and trailing whitespace.
    pub fn stop_parts(&self) -> (&str, &str) {
        let ws = self
            .stop
            .char_indices()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, _)| i)
            .unwrap_or(self.stop.len());
        self.stop.split_at(ws)
    }

    /// Insert `extra` right after the punctuation mark, before trailing whitespace.
    pub fn push_after_stop(&mut self, extra: &str) {
        let (punct, ws) = self.stop_parts();
        self.stop = format!("{punct}{extra}{ws}");
    }

    pub fn render(&self) -> String {
        format!("{}{}", self.body, self.stop)
    }
}

/// Alternating `[content, stop, content, stop, …, content]` tokens.
///
/// Always returns an odd number of tokens; the empty string yields `[""]`.
pub fn split_keep_stops(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in SENTENCE_STOP.find_iter(text) {
        out.push(text[last..m.start()].to_string());
        out.push(m.as_str().to_string());
        last = m.end();
    }
    out.push(text[last..].to_string());
    out
}

/// Sentence units of `text`. A trailing fragment without punctuation is kept
/// as a final unit; an empty trailing fragment is dropped.
pub fn sentences(text: &str) -> Vec<Sentence> {
    let tokens = split_keep_stops(text);
    let mut out = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut it = tokens.into_iter();
    while let Some(body) = it.next() {
        let stop = it.next().unwrap_or_default();
        if body.is_empty() && stop.is_empty() {
            continue;
        }
        out.push(Sentence { body, stop });
    }
    out
}

pub fn join_sentences(units: &[Sentence]) -> String {
    units.iter().map(Sentence::render).collect()
}

/// Number of sentence units with a non-blank body.
pub fn sentence_count(text: &str) -> usize {
    sentences(text)
        .iter()
        .filter(|s| !s.body.trim().is_empty())
        .count()
}

pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_BREAK).collect()
}

pub fn join_paragraphs<S: AsRef<str>>(paras: &[S]) -> String {
    paras
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK)
}

/// Byte offset just past the first sentence terminator's punctuation mark.
pub fn first_terminator_end(text: &str) -> Option<usize> {
    TERMINATOR.find(text).map(|m| {
        let first = m.as_str().chars().next().map(char::len_utf8).unwrap_or(0);
        m.start() + first
    })
}

/// Character lengths of all paragraphs.
pub fn paragraph_lengths(text: &str) -> Vec<usize> {
    paragraphs(text).iter().map(|p| p.chars().count()).collect()
}

/// Population mean and standard deviation of `values`; `(0, 0)` when empty.
pub fn mean_and_stddev(values: &[usize]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}

/// Coefficient of variation (stddev / mean); zero when the mean is zero.
pub fn coefficient_of_variation(values: &[usize]) -> f64 {
    let (mean, sd) = mean_and_stddev(values);
    if mean <= f64::EPSILON {
        0.0
    } else {
        sd / mean
    }
}
