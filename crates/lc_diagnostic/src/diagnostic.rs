use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic with everything needed to report one problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// 1-based input line the problem was found on.
    pub line: Option<usize>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Text suggestions for fixing the problem.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            line: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the input line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the problem.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        if let Some(line) = self.line {
            write!(f, "\n  --> line {line}")?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
