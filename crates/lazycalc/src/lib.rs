//! Lazycalc - an interactive calculator over lazily evaluated registers.
//!
//! Each input line is one command:
//!
//! ```text
//! <register> add|subtract|multiply <register|number>
//! print <register>
//! quit
//! ```
//!
//! Assignments only append to the operation log; `print` evaluates a
//! register from the whole log at that moment.
//!
//! This crate holds the command-line layer: argument handling, input
//! selection, configuration, logging setup and the line-reading
//! [`Driver`].

mod args;
mod config;
mod driver;
mod errors;
mod input;
mod tracing_setup;

pub use args::{parse_args, usage, Invocation};
pub use config::{Config, CyclePolicy, COLOR_ENV, CYCLES_ENV, LOG_ENV, OVERFLOW_ENV};
pub use driver::{Driver, ExitStatus};
pub use errors::CliError;
pub use input::{Input, InputSpec};
pub use tracing_setup::init_tracing;
