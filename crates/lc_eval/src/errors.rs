//! Evaluation errors.
//!
//! Every variant is scoped to one command: the session survives it.

use lc_diagnostic::{Diagnostic, ErrorCode};
use lc_ir::{InternError, OpKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A register depends on itself. `path` starts and ends with the same
    /// register.
    #[error("evaluation cycle: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error("integer overflow: {lhs} {op} {rhs}")]
    Overflow { op: OpKind, lhs: i64, rhs: i64 },

    #[error("number `{literal}` does not fit in 64 bits")]
    LiteralOutOfRange { literal: String },

    #[error("cannot assign to the number `{literal}`")]
    AssignToLiteral { literal: String },

    #[error(transparent)]
    RegisterTable(#[from] InternError),
}

impl EvalError {
    /// Diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Cycle { .. } => ErrorCode::E2001,
            EvalError::Overflow { .. } => ErrorCode::E2002,
            EvalError::LiteralOutOfRange { .. } => ErrorCode::E2003,
            EvalError::AssignToLiteral { .. } => ErrorCode::E1007,
            EvalError::RegisterTable(_) => ErrorCode::E2004,
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, EvalError::Cycle { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::Cycle { .. } => {
                diag.with_note("registers on a cycle have no value; nothing was printed")
            }
            EvalError::Overflow { .. } | EvalError::LiteralOutOfRange { .. } => {
                diag.with_note("register values are 64-bit signed integers")
            }
            EvalError::AssignToLiteral { .. } => {
                diag.with_note("registers cannot be named with digits only")
            }
            EvalError::RegisterTable(_) => diag,
        }
    }
}
