//! Operands of update records.
//!
//! The literal/register split is lexical: a non-empty all-digit token is a
//! literal, anything else names a register. No register can therefore be
//! spelled with digits only.

use crate::{InternError, Interner, Name};
use std::fmt;

/// Whether `token` is a non-negative decimal integer literal.
///
/// No sign, no whitespace, no other characters.
#[inline]
pub fn is_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// An integer literal operand, kept as its digit text.
///
/// The numeric value is produced on demand by [`Literal::value`], so a
/// literal too large for `i64` is only an error when it is evaluated.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal(Box<str>);

impl Literal {
    /// Wrap `token` if it has literal shape.
    pub fn new(token: &str) -> Option<Self> {
        is_literal(token).then(|| Literal(token.into()))
    }

    /// The digit text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, or `None` if it does not fit in `i64`.
    pub fn value(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Right-hand side of an update record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operand {
    Register(Name),
    Literal(Literal),
}

impl Operand {
    /// Classify a token, interning it if it names a register.
    pub fn classify(token: &str, interner: &mut Interner) -> Result<Self, InternError> {
        match Literal::new(token) {
            Some(literal) => Ok(Operand::Literal(literal)),
            None => interner.try_intern(token).map(Operand::Register),
        }
    }

    /// The register this operand refers to, if any.
    pub fn register(&self) -> Option<Name> {
        match self {
            Operand::Register(name) => Some(*name),
            Operand::Literal(_) => None,
        }
    }
}
