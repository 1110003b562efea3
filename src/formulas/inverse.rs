//! Rep prediction: `(known 1RM, weight) -> reps achievable at that weight`.
//!
//! Each function solves its forward formula for `reps`. The only guard is on
//! the 1RM: `rm1 <= 0` returns `0.0`. A zero `weight` is not checked and gives
//! an infinite (or NaN) result.
//!
//! Brzycki, Mayhew and Wathan are exact inverses, so feeding an estimate back
//! in returns the reps it came from. This differs from the rearrangements
//! shipped by earlier 1RM libraries, which swap `rm1/weight` (Brzycki) or the
//! subtraction order (Mayhew, Wathan). See `CHANGELOG.md`.

use crate::domain::{Formula, FormulaValues};

use super::{brzycki, epley, lombardi, mayhew, wathan};

/// Epley inverse: `30 × (rm1/w - 1)`.
pub fn predict_reps_epley(rm1: f64, weight: f64) -> f64 {
    if rm1 <= 0.0 {
        return 0.0;
    }
    epley::DIVISOR * (rm1 / weight - 1.0)
}

/// Brzycki inverse: `(1.0278 - w/rm1) / 0.0278`.
pub fn predict_reps_brzycki(rm1: f64, weight: f64) -> f64 {
    if rm1 <= 0.0 {
        return 0.0;
    }
    (brzycki::INTERCEPT - weight / rm1) / brzycki::SLOPE
}

/// Lombardi inverse: `40 × (rm1/w - 1)`.
pub fn predict_reps_lombardi(rm1: f64, weight: f64) -> f64 {
    if rm1 <= 0.0 {
        return 0.0;
    }
    lombardi::DIVISOR * (rm1 / weight - 1.0)
}

/// Mayhew inverse: `100 × (100 × w/rm1 - 52.2) / 41.9`.
pub fn predict_reps_mayhew(rm1: f64, weight: f64) -> f64 {
    if rm1 <= 0.0 {
        return 0.0;
    }
    100.0 * (100.0 * weight / rm1 - mayhew::A) / mayhew::B
}

/// Wathan inverse: `100 × (100 × w/rm1 - 48.8) / 53.8`.
pub fn predict_reps_wathan(rm1: f64, weight: f64) -> f64 {
    if rm1 <= 0.0 {
        return 0.0;
    }
    100.0 * (100.0 * weight / rm1 - wathan::A) / wathan::B
}

/// Predict with an explicit formula.
///
/// Unlike [`super::estimate_1rm`], there is no rep-range policy here: `Default`
/// (like `Epley`) uses the Epley inverse.
pub fn predict_reps(rm1: f64, weight: f64, formula: Formula) -> f64 {
    match formula {
        Formula::Brzycki => predict_reps_brzycki(rm1, weight),
        Formula::Lombardi => predict_reps_lombardi(rm1, weight),
        Formula::Mayhew => predict_reps_mayhew(rm1, weight),
        Formula::Wathan => predict_reps_wathan(rm1, weight),
        Formula::Epley | Formula::Default => predict_reps_epley(rm1, weight),
    }
}

/// Predict from a free-form tag; unrecognized tags use the Epley inverse.
pub fn predict_reps_by_tag(rm1: f64, weight: f64, tag: &str) -> f64 {
    predict_reps(rm1, weight, Formula::from_tag(tag))
}

/// Every named inverse for the same pair.
pub fn predict_reps_all(rm1: f64, weight: f64) -> FormulaValues {
    Formula::NAMED
        .iter()
        .map(|&f| (f, predict_reps(rm1, weight, f)))
        .collect()
}
