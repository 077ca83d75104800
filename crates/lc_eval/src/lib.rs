//! Lazycalc Eval - lazy evaluation of registers over an operation log.
//!
//! # Architecture
//!
//! - [`OperationLog`]: append-only list of `target <op> operand` records,
//!   the only source of truth for register values
//! - [`Session`]: owns the log, the interner, the set of known registers
//!   and the per-print scratch state
//! - `Evaluator`: folds a register's records in log order, resolving
//!   register operands with an explicit frame stack, memoizing results and
//!   detecting cycles
//! - [`PrintHandler`](PrintHandlerImpl): where printed values go
//!
//! Nothing is cached across prints: every `print` re-derives its register
//! from the full log.

mod config;
mod errors;
mod evaluator;
mod log;
mod operators;
mod print_handler;
mod session;

pub use config::{EvalConfig, OverflowPolicy};
pub use errors::EvalError;
pub use log::{Operation, OperationLog};
pub use operators::apply;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use session::{Outcome, Session, SessionBuilder};
