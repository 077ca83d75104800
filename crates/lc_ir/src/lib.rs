//! Lazycalc IR - shared vocabulary for the calculator crates.
//!
//! # Contents
//!
//! - [`Name`]: compact identifier for a register, produced by [`Interner`]
//! - [`OpKind`]: the three register update operators
//! - [`Operand`] / [`Literal`]: right-hand side of an update record
//! - [`Command`]: a validated input line
//! - [`KnownRegisters`]: the query the command validator needs from a session

mod command;
mod interner;
mod name;
mod op_kind;
mod operand;

pub use command::{Command, KnownRegisters};
pub use interner::{InternError, Interner};
pub use name::Name;
pub use op_kind::OpKind;
pub use operand::{is_literal, Literal, Operand};
