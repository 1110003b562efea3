//! Forward estimation: `(weight, reps) -> estimated 1RM`.
//!
//! Inputs are trusted. Nothing is clamped, so degenerate inputs flow through
//! ordinary float arithmetic (Brzycki's denominator vanishes near 37 reps and
//! the estimate goes to infinity, then flips sign).

use crate::domain::{Formula, FormulaValues};

use super::{brzycki, epley, lombardi, mayhew, wathan};

/// At or below this many reps the lifted weight already is the 1RM.
const SINGLE_REP: f64 = 1.0;

/// Upper rep bound for the Brzycki band of the default policy.
const BRZYCKI_MAX_REPS: f64 = 5.0;

/// Upper rep bound for the Epley band; Wathan takes over above it.
const EPLEY_MAX_REPS: f64 = 10.0;

/// Epley: `w × (1 + r/30)`.
pub fn estimate_1rm_epley(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / epley::DIVISOR)
}

/// Brzycki: `w / (1.0278 - 0.0278 × r)`.
pub fn estimate_1rm_brzycki(weight: f64, reps: f64) -> f64 {
    weight / (brzycki::INTERCEPT - brzycki::SLOPE * reps)
}

/// Lombardi as used here: `w × (1 + r/40)`.
pub fn estimate_1rm_lombardi(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / lombardi::DIVISOR)
}

/// Mayhew: `w × 100 / (52.2 + 41.9 × r/100)`.
pub fn estimate_1rm_mayhew(weight: f64, reps: f64) -> f64 {
    weight * (100.0 / (mayhew::A + mayhew::B * reps / 100.0))
}

/// Wathan: `w × 100 / (48.8 + 53.8 × r/100)`.
pub fn estimate_1rm_wathan(weight: f64, reps: f64) -> f64 {
    weight * (100.0 / (wathan::A + wathan::B * reps / 100.0))
}

/// Picks a formula by rep range.
///
/// - `reps <= 1`: the weight itself
/// - `1 < reps <= 5`: Brzycki
/// - `5 < reps <= 10`: Epley
/// - `reps > 10`: Wathan
pub fn estimate_1rm_default(weight: f64, reps: f64) -> f64 {
    default_formula_for(reps).map_or(weight, |f| estimate_1rm(weight, reps, f))
}

/// The formula the default policy would use for `reps`, or `None` when the
/// weight is returned unchanged.
pub fn default_formula_for(reps: f64) -> Option<Formula> {
    if reps <= SINGLE_REP {
        None
    } else if reps <= BRZYCKI_MAX_REPS {
        Some(Formula::Brzycki)
    } else if reps <= EPLEY_MAX_REPS {
        Some(Formula::Epley)
    } else {
        Some(Formula::Wathan)
    }
}

/// Estimate with an explicit formula. `Formula::Default` applies the rep-range policy.
pub fn estimate_1rm(weight: f64, reps: f64, formula: Formula) -> f64 {
    match formula {
        Formula::Epley => estimate_1rm_epley(weight, reps),
        Formula::Brzycki => estimate_1rm_brzycki(weight, reps),
        Formula::Lombardi => estimate_1rm_lombardi(weight, reps),
        Formula::Mayhew => estimate_1rm_mayhew(weight, reps),
        Formula::Wathan => estimate_1rm_wathan(weight, reps),
        Formula::Default => estimate_1rm_default(weight, reps),
    }
}

/// Estimate from a free-form tag; unrecognized tags use the default policy.
pub fn estimate_1rm_by_tag(weight: f64, reps: f64, tag: &str) -> f64 {
    estimate_1rm(weight, reps, Formula::from_tag(tag))
}

/// Every named formula for the same pair. `Default` is not included.
pub fn estimate_1rm_all(weight: f64, reps: f64) -> FormulaValues {
    Formula::NAMED
        .iter()
        .map(|&f| (f, estimate_1rm(weight, reps, f)))
        .collect()
}
