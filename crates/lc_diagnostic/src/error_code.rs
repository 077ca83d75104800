use std::fmt;

/// Error codes for all calculator diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Startup and input errors
/// - E1xxx: Command validation errors
/// - E2xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Startup / input (E0xxx)
    /// Input file cannot be opened
    E0001,
    /// Too many command-line arguments
    E0002,
    /// Reading an input line failed
    E0003,
    /// Invalid configuration value
    E0004,

    // Command validation (E1xxx)
    /// Wrong number of tokens
    E1001,
    /// Unknown single-word command
    E1002,
    /// Two-word command that is not `print`
    E1003,
    /// Printing a literal
    E1004,
    /// Printing an unknown register
    E1005,
    /// Unknown operator
    E1006,
    /// Assigning to a literal
    E1007,

    // Evaluation (E2xxx)
    /// Evaluation cycle
    E2001,
    /// Integer overflow
    E2002,
    /// Literal out of range
    E2003,
    /// Register table full
    E2004,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "the input file could not be opened",
            ErrorCode::E0002 => "at most one argument (an input file) is accepted",
            ErrorCode::E0003 => "an input line could not be read",
            ErrorCode::E0004 => "a configuration variable has an unrecognised value",
            ErrorCode::E1001 => "commands have one, two or three words",
            ErrorCode::E1002 => "the only one-word command is `quit`",
            ErrorCode::E1003 => "the only two-word command is `print <register>`",
            ErrorCode::E1004 => "`print` takes a register, not a number",
            ErrorCode::E1005 => "`print` names a register no operation has mentioned",
            ErrorCode::E1006 => "operators are `add`, `subtract` and `multiply`",
            ErrorCode::E1007 => "a number cannot be the target of an operation",
            ErrorCode::E2001 => "a register depends on itself",
            ErrorCode::E2002 => "a result does not fit in a 64-bit signed integer",
            ErrorCode::E2003 => "a literal does not fit in a 64-bit signed integer",
            ErrorCode::E2004 => "too many distinct register names",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E2001.as_str(), "E2001");
    }

    #[test]
    fn test_every_code_is_listed_once() {
        for (i, code) in ErrorCode::ALL.iter().enumerate() {
            assert!(!code.description().is_empty());
            assert!(!ErrorCode::ALL[i + 1..].contains(code));
        }
    }
}
