//! Intensity → trigger probability curves.
//!
//! Structural and injection effects use a squared curve so low settings stay
//! conservative and the upper half of the slider accelerates. Phrase replacement is
//! gated once per match, so a linear curve is enough there.
//!
//! | family      | formula              | range        |
//! |-------------|----------------------|--------------|
//! | verbal tic  | 0.10 + i² · 0.60     | [0.10, 0.70] |
//! | opinion     | 0.15 + i² · 0.55     | [0.15, 0.70] |
//! | structural  | 0.20 + i² · 0.40     | [0.20, 0.60] |
//! | replacement | 0.30 + i · 0.60      | [0.30, 0.90] |

use serde::Serialize;

/// Normalize a 0–100 intensity to `[0,1]`, clamping anything outside the range.
#[inline]
pub fn normalize(intensity: f64) -> f64 {
    if intensity.is_nan() {
        return 0.0;
    }
    (intensity / 100.0).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Probabilities {
    pub verbal_tic: f64,
    pub opinion: f64,
    pub structural: f64,
    pub replacement: f64,
}

impl Probabilities {
    pub fn for_intensity(intensity: f64) -> Self {
        let i = normalize(intensity);
        let sq = i * i;
        Self {
            verbal_tic: 0.10 + sq * 0.60,
            opinion: 0.15 + sq * 0.55,
            structural: 0.20 + sq * 0.40,
            replacement: 0.30 + i * 0.60,
        }
    }
}

/// Free-function form used by the HTTP layer and tests.
pub fn probabilities(intensity: f64) -> Probabilities {
    Probabilities::for_intensity(intensity)
}
