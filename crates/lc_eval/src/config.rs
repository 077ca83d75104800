//! Evaluation settings.

use std::fmt;

/// What happens when an operation leaves the `i64` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail the current print with an overflow error.
    #[default]
    Checked,
    /// Two's-complement wraparound.
    Wrapping,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,
}

impl OverflowPolicy {
    /// Parse a policy name (`checked`, `wrapping`, `saturating`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "checked" => Some(OverflowPolicy::Checked),
            "wrapping" => Some(OverflowPolicy::Wrapping),
            "saturating" => Some(OverflowPolicy::Saturating),
            _ => None,
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Saturating => "saturating",
        })
    }
}

/// Settings consulted by the evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub overflow: OverflowPolicy,
}
