//! Command classification and validation.

use lc_diagnostic::{Diagnostic, ErrorCode};
use lc_ir::{is_literal, Command, KnownRegisters, OpKind};

use crate::tokenize;

/// Why a line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 1, 2 or 3 words, found {count}")]
    WrongArity { count: usize },
    #[error("unknown command `{word}`")]
    UnknownCommand { word: String },
    #[error("expected `print`, found `{word}`")]
    ExpectedPrint { word: String },
    #[error("cannot print the number `{literal}`")]
    PrintLiteral { literal: String },
    #[error("unknown register `{name}`")]
    UnknownRegister { name: String },
    #[error("unknown operator `{word}`")]
    UnknownOperator { word: String },
    #[error("cannot assign to the number `{literal}`")]
    AssignToLiteral { literal: String },
}

impl ParseError {
    /// Diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::WrongArity { .. } => ErrorCode::E1001,
            ParseError::UnknownCommand { .. } => ErrorCode::E1002,
            ParseError::ExpectedPrint { .. } => ErrorCode::E1003,
            ParseError::PrintLiteral { .. } => ErrorCode::E1004,
            ParseError::UnknownRegister { .. } => ErrorCode::E1005,
            ParseError::UnknownOperator { .. } => ErrorCode::E1006,
            ParseError::AssignToLiteral { .. } => ErrorCode::E1007,
        }
    }

    /// Convert into a warning diagnostic. Rejected lines never stop a session.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::warning(self.code()).with_message(self.to_string());
        match self {
            ParseError::WrongArity { .. } => diag.with_note(
                "commands are `<register> <operator> <register|number>`, `print <register>` or `quit`",
            ),
            ParseError::UnknownCommand { .. } => {
                diag.with_suggestion("use `quit` to end the session")
            }
            ParseError::ExpectedPrint { .. } => {
                diag.with_suggestion("use `print <register>` to show a value")
            }
            ParseError::PrintLiteral { .. } | ParseError::AssignToLiteral { .. } => {
                diag.with_note("registers cannot be named with digits only")
            }
            ParseError::UnknownRegister { name } => diag
                .with_note("a register becomes known once an operation mentions it")
                .with_suggestion(format!("define it first, e.g. `{name} add 1`")),
            ParseError::UnknownOperator { .. } => {
                diag.with_note("operators are `add`, `subtract` and `multiply`")
            }
        }
    }
}

/// Classify and validate one sanitized line.
///
/// - 1 word: `quit`
/// - 2 words: `print <register>`, where the register is not a number and is
///   already known
/// - 3 words: `<target> <operator> <operand>`, where the target is not a number
///
/// Anything else is rejected.
pub fn parse_command<'a>(
    line: &'a str,
    known: &impl KnownRegisters,
) -> Result<Command<'a>, ParseError> {
    let words = tokenize(line);
    tracing::trace!(words = words.len(), "classifying command");

    match words.as_slice() {
        &[word] => {
            if word == "quit" {
                Ok(Command::Quit)
            } else {
                Err(ParseError::UnknownCommand { word: word.into() })
            }
        }
        &[keyword, register] => {
            if keyword != "print" {
                Err(ParseError::ExpectedPrint {
                    word: keyword.into(),
                })
            } else if is_literal(register) {
                Err(ParseError::PrintLiteral {
                    literal: register.into(),
                })
            } else if !known.is_known(register) {
                Err(ParseError::UnknownRegister {
                    name: register.into(),
                })
            } else {
                Ok(Command::Print { register })
            }
        }
        &[target, op, operand] => {
            let Some(op) = OpKind::from_keyword(op) else {
                return Err(ParseError::UnknownOperator { word: op.into() });
            };
            if is_literal(target) {
                return Err(ParseError::AssignToLiteral {
                    literal: target.into(),
                });
            }
            Ok(Command::Assign {
                target,
                op,
                operand,
            })
        }
        _ => Err(ParseError::WrongArity { count: words.len() }),
    }
}
