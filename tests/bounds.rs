// tests/bounds.rs
//
// Range guarantees for probabilities and scores.

use ghostwriter_humanizer::{calculate_humanity_score, probabilities, HumanizationConfig};

fn within(v: f64, lo: f64, hi: f64) -> bool {
    v >= lo - 1e-12 && v <= hi + 1e-12
}

#[test]
fn probabilities_stay_in_documented_ranges() {
    let mut inputs: Vec<f64> = (0..=100).map(f64::from).collect();
    inputs.extend([-50.0, 150.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 33.3]);
    for i in inputs {
        let p = probabilities(i);
        assert!(within(p.verbal_tic, 0.10, 0.70), "verbal_tic {i}: {p:?}");
        assert!(within(p.opinion, 0.15, 0.70), "opinion {i}: {p:?}");
        assert!(within(p.structural, 0.20, 0.60), "structural {i}: {p:?}");
        assert!(within(p.replacement, 0.30, 0.90), "replacement {i}: {p:?}");
    }
}

#[test]
fn squared_curves_widen_the_gap() {
    let lo = probabilities(10.0);
    let hi = probabilities(90.0);
    assert!(hi.verbal_tic - lo.verbal_tic > 0.45);
    assert!((hi.replacement - lo.replacement - 0.48).abs() < 1e-9);
}

fn assert_score_bounded(text: &str) {
    let s = calculate_humanity_score(text, &HumanizationConfig::default());
    let b = &s.breakdown;
    for (name, v) in [
        ("overall", s.overall),
        ("logic", b.logic_variance),
        ("vocabulary", b.vocabulary_naturalness),
        ("rhythm", b.rhythm_variation),
        ("emotional", b.emotional_content),
        ("personality", b.personality_strength),
    ] {
        assert!(v.is_finite() && (0.0..=100.0).contains(&v), "{name}={v}");
    }
}

#[test]
fn scores_bounded_for_empty_input() {
    assert_score_bounded("");
    assert_score_bounded("\n\n");
}

#[test]
fn scores_bounded_for_long_repeated_input() {
    let unit = "總而言之！說實話我覺得真的很好...（其實）你知道嗎？但是此外。\n\n短。\n\n";
    assert_score_bounded(&unit.repeat(3000));
    assert_score_bounded(&"a".repeat(200_000));
    assert_score_bounded(&"\n\n".repeat(1000));
}
