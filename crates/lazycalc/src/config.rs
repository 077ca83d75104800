//! Runtime configuration read from the environment.
//!
//! | Variable            | Values                              | Default   |
//! |---------------------|-------------------------------------|-----------|
//! | `LAZYCALC_OVERFLOW` | `checked`, `wrapping`, `saturating` | `checked` |
//! | `LAZYCALC_CYCLES`   | `recover`, `abort`                  | `recover` |
//! | `LAZYCALC_COLOR`    | `auto`, `always`, `never`           | `auto`    |
//! | `LAZYCALC_LOG`      | a `tracing` filter directive        | unset     |
//!
//! Values are matched case-insensitively after trimming. An empty value
//! counts as unset.

use lc_diagnostic::emitter::ColorMode;
use lc_eval::OverflowPolicy;

use crate::CliError;

pub const OVERFLOW_ENV: &str = "LAZYCALC_OVERFLOW";
pub const CYCLES_ENV: &str = "LAZYCALC_CYCLES";
pub const COLOR_ENV: &str = "LAZYCALC_COLOR";
pub const LOG_ENV: &str = "LAZYCALC_LOG";

/// What the driver does after a print hits an evaluation cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Report the cycle and keep reading commands.
    #[default]
    Recover,
    /// Report the cycle and stop with a failing exit status.
    Abort,
}

impl CyclePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recover" => Some(CyclePolicy::Recover),
            "abort" => Some(CyclePolicy::Abort),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub overflow: OverflowPolicy,
    pub cycles: CyclePolicy,
    pub color: ColorMode,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        Ok(Config {
            overflow: setting(
                &lookup,
                OVERFLOW_ENV,
                "checked, wrapping, saturating",
                OverflowPolicy::from_name,
            )?
            .unwrap_or_default(),
            cycles: setting(&lookup, CYCLES_ENV, "recover, abort", CyclePolicy::from_name)?
                .unwrap_or_default(),
            color: setting(&lookup, COLOR_ENV, "auto, always, never", ColorMode::from_name)?
                .unwrap_or_default(),
        })
    }
}

fn setting<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    expected: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, CliError> {
    let Some(raw) = lookup(variable) else {
        return Ok(None);
    };
    let value = raw.trim().to_ascii_lowercase();
    if value.is_empty() {
        return Ok(None);
    }
    match parse(&value) {
        Some(parsed) => Ok(Some(parsed)),
        None => Err(CliError::InvalidConfig {
            variable,
            value: raw,
            expected,
        }),
    }
}
