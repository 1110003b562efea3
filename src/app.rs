//! Top-level application orchestration.
//!
//! `src/main.rs` only sets up logging and maps errors to exit codes; this
//! module parses arguments, resolves config, runs the formulas and prints.

use clap::Parser;

use crate::cli::{BatchArgs, Cli, Command, EstimateArgs, PredictArgs};
use crate::config::AppConfig;
use crate::domain::{Comparison, Estimate, Prediction};
use crate::error::AppError;
use crate::formulas::{estimate_1rm, estimate_1rm_all, predict_reps, predict_reps_all};

pub mod pipeline;

/// Entry point for the `orm` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let env_config = AppConfig::from_env()?;
    log::debug!("environment config: {env_config:?}");

    match cli.command {
        Command::Estimate(args) => {
            let config = env_config.with_overrides(args.formula, cli.precision);
            println!("{}", handle_estimate(&args, &config)?);
        }
        Command::Predict(args) => {
            let config = env_config.with_overrides(args.formula, cli.precision);
            println!("{}", handle_predict(&args, &config)?);
        }
        Command::Batch(args) => {
            let config = env_config.with_overrides(args.formula, cli.precision);
            print!("{}", handle_batch(&args, &config)?);
        }
    }

    Ok(())
}

/// Render the output of `orm estimate`.
pub fn handle_estimate(args: &EstimateArgs, config: &AppConfig) -> Result<String, AppError> {
    if args.all {
        let comparison = Comparison {
            inputs: (args.weight, args.reps),
            values: estimate_1rm_all(args.weight, args.reps),
        };
        if args.json {
            return crate::report::to_json(&comparison);
        }
        let title = format!("Estimated 1RM for {} x {}", args.weight, args.reps);
        return Ok(crate::report::format_comparison(&title, "1rm", &comparison, config.precision));
    }

    log::debug!("estimate with {}", config.formula);
    let estimate = Estimate {
        weight: args.weight,
        reps: args.reps,
        formula: config.formula,
        one_rep_max: estimate_1rm(args.weight, args.reps, config.formula),
    };
    if args.json {
        return crate::report::to_json(&estimate);
    }
    Ok(crate::report::format_estimate(&estimate, config.precision))
}

/// Render the output of `orm predict`.
pub fn handle_predict(args: &PredictArgs, config: &AppConfig) -> Result<String, AppError> {
    if args.rm1 <= 0.0 {
        log::warn!("non-positive 1RM {}, every prediction is 0", args.rm1);
    }

    if args.all {
        let comparison = Comparison {
            inputs: (args.rm1, args.weight),
            values: predict_reps_all(args.rm1, args.weight),
        };
        if args.json {
            return crate::report::to_json(&comparison);
        }
        let title = format!("Predicted reps at {} with a 1RM of {}", args.weight, args.rm1);
        return Ok(crate::report::format_comparison(&title, "reps", &comparison, config.precision));
    }

    log::debug!("predict with {}", config.formula);
    let prediction = Prediction {
        one_rep_max: args.rm1,
        weight: args.weight,
        formula: config.formula,
        reps: predict_reps(args.rm1, args.weight, config.formula),
    };
    if args.json {
        return crate::report::to_json(&prediction);
    }
    Ok(crate::report::format_prediction(&prediction, config.precision))
}

/// Run `orm batch`: ingest, estimate, optionally export, then render.
pub fn handle_batch(args: &BatchArgs, config: &AppConfig) -> Result<String, AppError> {
    let ingested = crate::io::ingest::load_sets(&args.input)?;
    let output = pipeline::run_batch(ingested, config.formula);

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &output.results)?;
    }

    if args.json {
        let mut json = crate::report::to_json(&output.results)?;
        json.push('\n');
        return Ok(json);
    }
    Ok(crate::report::format_batch(&output, config.precision))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::Formula;

    fn estimate_args(weight: f64, reps: f64) -> EstimateArgs {
        EstimateArgs {
            weight,
            reps,
            formula: None,
            all: false,
            json: false,
        }
    }

    #[test]
    fn estimate_uses_configured_formula() {
        let config = AppConfig::default().with_overrides(Some(Formula::Epley), None);
        let out = handle_estimate(&estimate_args(100.0, 5.0), &config).unwrap();
        assert_eq!(out, "Epley 1RM for 100 x 5: 116.67");
    }

    #[test]
    fn estimate_default_resolves_by_reps() {
        let out = handle_estimate(&estimate_args(100.0, 15.0), &AppConfig::default()).unwrap();
        assert!(out.starts_with("Default (Wathan) 1RM for 100 x 15:"), "{out}");
    }

    #[test]
    fn estimate_all_as_json() {
        let args = EstimateArgs {
            all: true,
            json: true,
            ..estimate_args(100.0, 5.0)
        };
        let out = handle_estimate(&args, &AppConfig::default()).unwrap();
        let back: Comparison = serde_json::from_str(&out).unwrap();
        assert_eq!(back.values.len(), 5);
        assert_eq!(back.inputs, (100.0, 5.0));
    }

    #[test]
    fn predict_default_uses_epley() {
        let args = PredictArgs {
            rm1: 130.0,
            weight: 100.0,
            formula: None,
            all: false,
            json: true,
        };
        let out = handle_predict(&args, &AppConfig::default()).unwrap();
        let p: Prediction = serde_json::from_str(&out).unwrap();
        assert_eq!(p.formula, Formula::Default);
        assert!((p.reps - 9.0).abs() < 1e-9);
    }

    #[test]
    fn predict_negative_max_is_zero() {
        let args = PredictArgs {
            rm1: -5.0,
            weight: 100.0,
            formula: None,
            all: false,
            json: true,
        };
        let out = handle_predict(&args, &AppConfig::default()).unwrap();
        let p: Prediction = serde_json::from_str(&out).unwrap();
        assert_eq!(p.reps, 0.0);

        let all = PredictArgs { all: true, ..args };
        let out = handle_predict(&all, &AppConfig::default()).unwrap();
        let c: Comparison = serde_json::from_str(&out).unwrap();
        assert!(c.values.values().all(|&r| r == 0.0));
    }

    #[test]
    fn batch_with_missing_file_fails_with_input_code() {
        let args = BatchArgs {
            input: PathBuf::from("no/such/sets.csv"),
            formula: None,
            export: None,
            json: false,
        };
        let err = handle_batch(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
