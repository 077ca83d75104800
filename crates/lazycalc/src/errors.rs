//! Command-line layer errors.

use lc_diagnostic::{Diagnostic, ErrorCode};
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", open_message(.path, .source))]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("too many arguments: expected at most one input file, found {count}")]
    TooManyArguments { count: usize },

    #[error("invalid value `{value}` for {variable}")]
    InvalidConfig {
        variable: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to read input line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

fn open_message(path: &std::path::Path, source: &io::Error) -> String {
    let path = path.display();
    match source.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("cannot open '{path}': {source}"),
    }
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::OpenInput { .. } => ErrorCode::E0001,
            CliError::TooManyArguments { .. } => ErrorCode::E0002,
            CliError::Read { .. } => ErrorCode::E0003,
            CliError::InvalidConfig { .. } => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            CliError::TooManyArguments { .. } => {
                diag.with_suggestion("run `lazycalc <file>` or pipe commands into `lazycalc`")
            }
            CliError::InvalidConfig { expected, .. } => {
                diag.with_note(format!("expected one of: {expected}"))
            }
            CliError::Read { line, .. } => diag.with_line(*line),
            CliError::OpenInput { .. } => diag,
        }
    }
}
