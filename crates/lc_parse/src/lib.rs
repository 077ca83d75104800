//! Lazycalc Parse - turns raw input lines into validated commands.
//!
//! Two stages:
//! 1. [`sanitize`]: keep ASCII letters, digits and spaces; lowercase.
//! 2. [`parse_command`]: split into words and classify by word count,
//!    rejecting anything that must not reach the evaluator.
//!
//! A rejected line has no effect on the session. The caller reports the
//! [`ParseError`] (see [`ParseError::to_diagnostic`]) and moves on.

mod sanitize;
mod validate;

pub use sanitize::{sanitize, tokenize, Tokens};
pub use validate::{parse_command, ParseError};
