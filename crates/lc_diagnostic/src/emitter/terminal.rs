//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::Write;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a mode name (`auto`, `always`, `never`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(line) = diagnostic.line {
            let _ = write!(self.writer, "  --> ");
            self.write_colored(&format!("line {line}"), colors::SECONDARY);
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
