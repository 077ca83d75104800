//! Where commands are read from.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, StdinLock};
use std::path::PathBuf;

use crate::CliError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    Stdin,
    File(PathBuf),
}

impl InputSpec {
    /// Open the source for reading.
    pub fn open(&self) -> Result<Input, CliError> {
        match self {
            InputSpec::Stdin => Ok(Input::Stdin(io::stdin().lock())),
            InputSpec::File(path) => File::open(path)
                .map(|file| Input::File(BufReader::new(file)))
                .map_err(|source| CliError::OpenInput {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// An opened command source.
pub enum Input {
    Stdin(StdinLock<'static>),
    File(BufReader<File>),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Input::Stdin(stdin) => stdin.fill_buf(),
            Input::File(file) => file.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Input::Stdin(stdin) => stdin.consume(amt),
            Input::File(file) => file.consume(amt),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lc_diagnostic::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a add 1").unwrap();
        let mut input = InputSpec::File(file.path().to_path_buf()).open().unwrap();
        let mut line = String::new();
        input.read_line(&mut line).unwrap();
        assert_eq!(line, "a add 1\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let Err(err) = InputSpec::File(path).open() else {
            panic!("opening a missing file succeeded");
        };
        assert_eq!(err.code(), ErrorCode::E0001);
        assert!(err.to_string().starts_with("cannot find file"));
    }
}
