//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the formula tag (`Formula`)
//! - batch input rows (`LiftSet`)
//! - result values (`Estimate`, `Prediction`, `Comparison`, `SetEstimate`)

pub mod types;

pub use types::*;
