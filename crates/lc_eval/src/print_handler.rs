//! Print handler for configurable output.
//!
//! Printed register values go to one of:
//! - stdout (the binary)
//! - a buffer (tests, embedding)
//!
//! Uses enum dispatch instead of trait objects; the set of sinks is closed.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Writes printed values to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    ///
    /// A closed stdout (e.g. a broken pipe) drops the line rather than
    /// aborting the session.
    pub fn println(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{msg}");
    }
}

/// Captures printed values in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for stdout, which captures nothing.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
