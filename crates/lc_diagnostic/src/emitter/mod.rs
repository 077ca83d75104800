//! Diagnostic Emitters
//!
//! The calculator reports to a terminal (stderr in the binary, a byte
//! buffer in tests) through the `DiagnosticEmitter` trait.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Collects diagnostics in memory instead of rendering them.
#[derive(Default, Debug)]
pub struct CollectingEmitter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codes of everything emitted so far, in order.
    pub fn codes(&self) -> Vec<crate::ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

impl DiagnosticEmitter for CollectingEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn flush(&mut self) {}
}
