//! `one-rep-max` library crate.
//!
//! The math lives in [`formulas`]: five published 1RM regressions, their
//! inverses, and the rep-range based default selection. Everything else is the
//! shell used by the `orm` binary (CLI parsing, config, CSV batch runs, reports).

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod formulas;
pub mod io;
pub mod report;

/// Library version, kept in lockstep with the package version.
pub const VERSION: &str = "1.0.1";
