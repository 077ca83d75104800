//! Diagnostic system for calculator error reporting.
//!
//! Every rejected line, failed evaluation and startup problem is reported as
//! a [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Input line (where it went wrong)
//! - Notes and suggestions (why, and how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
