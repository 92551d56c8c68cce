//! Strip stock AI phrasing.
//!
//! One draw per match against the replacement probability. Draws in the lower half
//! of the triggered band also swap in a human phrase of the same script; the rest
//! delete the phrase and one trailing separator.

use tracing::debug;

use super::{pool, PassContext};
use crate::humanize::TransformationKind;
use crate::phrases::{joiner, COMPILED_AI_PHRASES};

pub const REMOVED_MARKER: &str = "[removed]";

/// Share of the triggered band that substitutes instead of deleting.
const SUBSTITUTE_SHARE: f64 = 0.5;

pub fn apply(text: &str, ctx: &mut PassContext<'_>) -> String {
    let config = ctx.config;
    let p = ctx.probs.replacement;
    let mut out = text.to_string();
    let mut hits = 0usize;

    for cp in COMPILED_AI_PHRASES.iter() {
        if !cp.with_separator.is_match(&out) {
            continue;
        }
        let mut candidates = pool(cp.category.replacement_pool(), config);
        candidates.retain(|c| c.is_ascii() == cp.phrase.is_ascii());

        let mut rebuilt = String::with_capacity(out.len());
        let mut last = 0;
        for m in cp.with_separator.find_iter(&out) {
            rebuilt.push_str(&out[last..m.start()]);
            last = m.end();

            let draw = ctx.dice.draw();
            if draw >= p {
                rebuilt.push_str(m.as_str());
                continue;
            }
            let substitute = if draw < p * SUBSTITUTE_SHARE {
                ctx.dice.pick(&candidates)
            } else {
                None
            };
            let transformed = match substitute {
                Some(s) => {
                    rebuilt.push_str(s);
                    rebuilt.push_str(joiner(s));
                    s.to_string()
                }
                None => REMOVED_MARKER.to_string(),
            };
            hits += 1;
            ctx.record(
                TransformationKind::PhraseRemoval,
                m.as_str(),
                transformed,
                format!(
                    "Removed AI {} phrase \"{}\"",
                    cp.category.as_str(),
                    cp.phrase
                ),
            );
        }
        rebuilt.push_str(&out[last..]);
        out = rebuilt;
    }

    debug!(target: "humanize", pass = "phrase_removal", hits, "pass done");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HumanizationConfig;
    use crate::passes::testutil::{run_forced, run_with};
    use crate::random::FixedRandom;

    #[test]
    fn forced_draw_replaces_chinese_transition() {
        let cfg = HumanizationConfig::default();
        let (out, log) = run_forced(&cfg, "總而言之，AI很厲害。", apply);
        assert!(!out.contains("總而言之"), "{out}");
        let e = &log.entries()[0];
        assert_eq!(e.kind, TransformationKind::PhraseRemoval);
        assert_eq!(e.original, "總而言之，");
        assert!(e.reason.contains("總而言之"));
        // always-open dice picks the first transition phrase
        assert!(out.starts_with("而且啊，AI很厲害。"), "{out}");
    }

    #[test]
    fn latin_phrases_are_deleted_not_swapped_for_chinese() {
        let cfg = HumanizationConfig::default();
        let (out, log) = run_forced(&cfg, "Furthermore, the plan works.", apply);
        assert_eq!(out, "the plan works.");
        assert_eq!(log.entries()[0].transformed, REMOVED_MARKER);
    }

    #[test]
    fn user_ascii_tics_can_replace_latin_phrases() {
        let cfg = HumanizationConfig {
            verbal_tics: vec!["Honestly".into()],
            ..Default::default()
        };
        // "Studies show" is an opener -> conversational pool
        let (out, _) = run_forced(&cfg, "Studies show it works.", apply);
        assert_eq!(out, "Honestly, it works.");
    }

    #[test]
    fn words_containing_a_latin_phrase_are_untouched() {
        let cfg = HumanizationConfig::default();
        let (out, log) = run_forced(&cfg, "We leveraged the data.", apply);
        assert_eq!(out, "We leveraged the data.");
        assert!(log.is_empty());
    }

    #[test]
    fn closed_dice_leaves_text_alone() {
        let cfg = HumanizationConfig::default();
        let text = "此外，值得注意的是，這很顯著的。";
        let (out, log) = run_with(&cfg, text, &mut FixedRandom::never(), apply);
        assert_eq!(out, text);
        assert!(log.is_empty());
    }

    #[test]
    fn every_occurrence_draws_independently() {
        let cfg = HumanizationConfig::default();
        let (out, log) = run_forced(&cfg, "此外，甲。此外，乙。", apply);
        assert!(!out.contains("此外"));
        assert_eq!(log.len(), 2);
    }
}
