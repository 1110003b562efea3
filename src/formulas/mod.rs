//! 1RM regressions and their inverses.
//!
//! Formulas are small, pure functions so callers (CLI, batch pipeline, other
//! apps) can use them directly:
//! - `forward`: estimate a 1RM from a submaximal set
//! - `inverse`: predict reps at a weight from a known 1RM

pub mod forward;
pub mod inverse;

pub use forward::*;
pub use inverse::*;

/// Epley: `1RM = w × (1 + r/30)`.
mod epley {
    pub const DIVISOR: f64 = 30.0;
}

/// Brzycki in linear form: `1RM = w / (1.0278 - 0.0278 × r)`.
mod brzycki {
    pub const INTERCEPT: f64 = 1.0278;
    pub const SLOPE: f64 = 0.0278;
}

/// Lombardi, linearized: `1RM = w × (1 + r/40)`.
mod lombardi {
    pub const DIVISOR: f64 = 40.0;
}

/// Mayhew et al.: `%1RM = A + B × r/100`.
mod mayhew {
    pub const A: f64 = 52.2;
    pub const B: f64 = 41.9;
}

/// Wathan: `%1RM = A + B × r/100`.
mod wathan {
    pub const A: f64 = 48.8;
    pub const B: f64 = 53.8;
}
