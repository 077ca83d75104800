//! Validated command shapes.

use crate::OpKind;

/// One validated input line.
///
/// Borrowed from the sanitized line; the session interns what it keeps.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command<'a> {
    /// `quit`
    Quit,
    /// `print <register>`
    Print { register: &'a str },
    /// `<target> <op> <register|literal>`
    Assign {
        target: &'a str,
        op: OpKind,
        operand: &'a str,
    },
}

/// The set of registers a `print` may name.
///
/// Implemented by the evaluation session; the validator only ever asks
/// about membership.
pub trait KnownRegisters {
    fn is_known(&self, name: &str) -> bool;
}

impl<F: Fn(&str) -> bool> KnownRegisters for F {
    fn is_known(&self, name: &str) -> bool {
        self(name)
    }
}
