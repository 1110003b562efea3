//! Runtime configuration from the environment.
//!
//! Values come from the process environment, with a `.env` file in the working
//! directory loaded first (via `dotenvy`). CLI flags override anything here.
//!
//! | Variable        | Meaning                                   | Default   |
//! |-----------------|-------------------------------------------|-----------|
//! | `ORM_FORMULA`   | formula used when `--formula` is omitted  | `default` |
//! | `ORM_PRECISION` | decimal places in text output (0..=10)    | `2`       |

use crate::domain::Formula;
use crate::error::AppError;

pub const ENV_FORMULA: &str = "ORM_FORMULA";
pub const ENV_PRECISION: &str = "ORM_PRECISION";

const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub formula: Formula,
    pub precision: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            formula: Formula::Default,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read `ORM_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unset or blank variables keep their defaults; anything else must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_FORMULA)) {
            config.formula = Formula::parse(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "Invalid {ENV_FORMULA}='{raw}' (expected one of: epley, brzycki, lombardi, mayhew, wathan, default)."
                ))
            })?;
        }

        if let Some(raw) = non_blank(lookup(ENV_PRECISION)) {
            config.precision = parse_precision(&raw)
                .map_err(|e| AppError::config(format!("Invalid {ENV_PRECISION}='{raw}': {e}.")))?;
        }

        Ok(config)
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, formula: Option<Formula>, precision: Option<usize>) -> Self {
        if let Some(f) = formula {
            self.formula = f;
        }
        if let Some(p) = precision {
            self.precision = p;
        }
        self
    }
}

/// Parse a decimal-place count in `0..=10`.
///
/// Shared by `ORM_PRECISION` and the `--precision` flag.
pub fn parse_precision(raw: &str) -> Result<usize, String> {
    let precision: usize = raw
        .trim()
        .parse()
        .map_err(|_| "expected an integer".to_string())?;
    if precision > MAX_PRECISION {
        return Err(format!("must be at most {MAX_PRECISION}"));
    }
    Ok(precision)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
