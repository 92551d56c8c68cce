//! Prepend conversational tics to sentences.

use tracing::debug;

use super::{pool, PassContext};
use crate::humanize::TransformationKind;
use crate::phrases::{joiner, HumanCategory};
use crate::segment::split_keep_stops;

/// Sentences this short are left alone so they don't fragment.
const MIN_UNIT_CHARS: usize = 20;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let config = ctx.config;
    let phrases = pool(HumanCategory::Conversational, config);
    let mut tokens = split_keep_stops(text);
    let mut hits = 0usize;

    // even indices are sentence bodies; index 0 is the opening sentence
    for i in (2..tokens.len()).step_by(2) {
        if tokens[i].chars().count() <= MIN_UNIT_CHARS {
            continue;
        }
        if !ctx.dice.chance(ctx.probs.verbal_tic) {
            continue;
        }
        let Some(phrase) = ctx.dice.pick(&phrases) else {
            continue;
        };
        let injected = format!("{phrase}{}{}", joiner(phrase), tokens[i]);
        ctx.record(
            TransformationKind::PhraseInjection,
            tokens[i].as_str(),
            injected.as_str(),
            format!("Added conversational phrase \"{phrase}\" for natural flow"),
        );
        tokens[i] = injected;
        hits += 1;
    }

    debug!(target: "humanize", pass = "verbal_tics", hits, "pass done");
    tokens.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HumanizationConfig;
    use crate::passes::testutil::run_forced;

    const LONG_A: &str = "這是一個相當長的句子，用來測試口語化的插入效果是否正常";
    const LONG_B: &str = "第二個句子同樣也很長，長度明顯超過二十個字的門檻限制";

    #[test]
    fn first_sentence_is_never_prefixed() {
        let cfg = HumanizationConfig::default();
        let text = format!("{LONG_A}。{LONG_B}。");
        let (out, log) = run_forced(&cfg, &text, apply);
        assert!(out.starts_with(LONG_A));
        assert_eq!(out, format!("{LONG_A}。說實話，{LONG_B}。"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].kind, TransformationKind::PhraseInjection);
    }

    #[test]
    fn short_sentences_are_skipped() {
        let cfg = HumanizationConfig::default();
        let (out, log) = run_forced(&cfg, "短句。也很短。還是短。", apply);
        assert_eq!(out, "短句。也很短。還是短。");
        assert!(log.is_empty());
    }

    #[test]
    fn ascii_tic_uses_ascii_joiner() {
        let cfg = HumanizationConfig {
            verbal_tics: vec!["Look".into()],
            ..Default::default()
        };
        let phrases = pool(HumanCategory::Conversational, &cfg);
        assert_eq!(*phrases.last().unwrap(), "Look");
        assert_eq!(joiner("Look"), ", ");
    }
}
