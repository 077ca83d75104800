//! Line-by-line command processing.
//!
//! The driver reads raw lines, sanitizes and validates them, hands valid
//! commands to the [`Session`] and reports everything that went wrong
//! through a [`DiagnosticEmitter`]. Rejected lines and failed prints
//! never end a session; only `quit`, end of input, a read failure, or a
//! cycle under [`CyclePolicy::Abort`] do.

use std::io::BufRead;

use lc_diagnostic::emitter::DiagnosticEmitter;
use lc_diagnostic::Diagnostic;
use lc_eval::{Outcome, Session};
use lc_parse::{parse_command, sanitize};

use crate::{CliError, CyclePolicy};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// A `quit` command was read.
    Quit,
    /// The input ran out.
    EndOfInput,
    /// A print hit a cycle and the cycle policy is `abort`.
    CycleAbort,
    /// Reading the input failed.
    ReadError,
}

impl ExitStatus {
    pub fn is_success(self) -> bool {
        matches!(self, ExitStatus::Quit | ExitStatus::EndOfInput)
    }

    /// Process exit code for this status.
    pub fn code(self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

pub struct Driver<E: DiagnosticEmitter> {
    session: Session,
    emitter: E,
    cycles: CyclePolicy,
    /// 1-based number of the last line read.
    line: usize,
}

impl<E: DiagnosticEmitter> Driver<E> {
    pub fn new(session: Session, emitter: E) -> Self {
        Driver {
            session,
            emitter,
            cycles: CyclePolicy::default(),
            line: 0,
        }
    }

    #[must_use]
    pub fn with_cycle_policy(mut self, cycles: CyclePolicy) -> Self {
        self.cycles = cycles;
        self
    }

    /// Process every line of `input` until the session ends.
    ///
    /// Lines are read as bytes; anything that is not ASCII is dropped by
    /// sanitization, so input that is not valid UTF-8 is not an error.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> ExitStatus {
        let mut buf = Vec::new();
        let status = loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break ExitStatus::EndOfInput,
                Ok(_) => {}
                Err(source) => {
                    let err = CliError::Read {
                        line: self.line + 1,
                        source,
                    };
                    tracing::error!(%err, "input failed");
                    self.report(&err.to_diagnostic());
                    break ExitStatus::ReadError;
                }
            }
            self.line += 1;
            if let Some(status) = self.process_line(&String::from_utf8_lossy(&buf)) {
                break status;
            }
        };
        tracing::debug!(?status, lines = self.line, "session ended");
        self.emitter.flush();
        status
    }

    /// Process one raw line. Returns the exit status if the line ends the
    /// session.
    pub fn process_line(&mut self, raw: &str) -> Option<ExitStatus> {
        let line = sanitize(raw);
        let command = match parse_command(&line, &self.session) {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(line = self.line, %err, "rejected command");
                let diag = err.to_diagnostic();
                self.report(&diag);
                return None;
            }
        };

        match self.session.execute(command) {
            Ok(Outcome::Quit) => Some(ExitStatus::Quit),
            Ok(Outcome::Defined | Outcome::Printed(_)) => None,
            Err(err) => {
                tracing::warn!(line = self.line, %err, "command failed");
                self.report(&err.to_diagnostic());
                (err.is_cycle() && self.cycles == CyclePolicy::Abort)
                    .then_some(ExitStatus::CycleAbort)
            }
        }
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        let diagnostic = if diagnostic.line.is_none() && self.line > 0 {
            diagnostic.clone().with_line(self.line)
        } else {
            diagnostic.clone()
        };
        self.emitter.emit(&diagnostic);
        self.emitter.flush();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    pub fn into_parts(self) -> (Session, E) {
        (self.session, self.emitter)
    }
}

#[cfg(test)]
mod tests;
