#![allow(clippy::unwrap_used)]

use std::io::{self, BufRead, Cursor, Read};

use lc_diagnostic::emitter::{CollectingEmitter, ColorMode, TerminalEmitter};
use lc_diagnostic::{ErrorCode, Severity};
use lc_eval::{buffer_handler, OverflowPolicy, Session};
use pretty_assertions::assert_eq;

use super::*;

fn driver() -> Driver<CollectingEmitter> {
    let session = Session::builder().print_handler(buffer_handler()).build();
    Driver::new(session, CollectingEmitter::new())
}

#[test]
fn test_runs_until_end_of_input() {
    let mut d = driver();
    let status = d.run(Cursor::new("a add 2\nprint a\na multiply 3\nprint a\n"));
    assert_eq!(status, ExitStatus::EndOfInput);
    assert_eq!(d.session().output(), "2\n6\n");
    assert_eq!(d.lines_read(), 4);
    assert!(d.emitter().diagnostics.is_empty());
}

#[test]
fn test_quit_stops_reading() {
    let mut d = driver();
    let status = d.run(Cursor::new("a add 1\nQUIT\nprint a\n"));
    assert_eq!(status, ExitStatus::Quit);
    assert_eq!(d.session().output(), "");
    assert_eq!(d.lines_read(), 2);
}

#[test]
fn test_rejected_lines_are_warnings_with_line_numbers() {
    let mut d = driver();
    d.run(Cursor::new("a add 1\n\nprint b\na divide 2\nprint a\n"));

    let (session, emitter) = d.into_parts();
    assert_eq!(session.output(), "1\n");
    assert_eq!(
        emitter.codes(),
        vec![ErrorCode::E1001, ErrorCode::E1005, ErrorCode::E1006]
    );
    let lines: Vec<_> = emitter.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![Some(2), Some(3), Some(4)]);
    assert!(emitter
        .diagnostics
        .iter()
        .all(|d| d.severity == Severity::Warning));
}

#[test]
fn test_missing_trailing_newline() {
    let mut d = driver();
    assert_eq!(d.run(Cursor::new("x add 5\nprint x")), ExitStatus::EndOfInput);
    assert_eq!(d.session().output(), "5\n");
}

#[test]
fn test_crlf_and_non_ascii_bytes() {
    let mut d = driver();
    let input: &[u8] = b"a add 4\r\n\xffprint\xfe a\r\n";
    assert_eq!(d.run(input), ExitStatus::EndOfInput);
    assert_eq!(d.session().output(), "4\n");
    assert!(d.emitter().diagnostics.is_empty());
}

#[test]
fn test_cycle_recovers_by_default() {
    let mut d = driver();
    let status = d.run(Cursor::new("a add b\nb add a\nprint a\nc add 3\nprint c\n"));
    assert_eq!(status, ExitStatus::EndOfInput);
    assert_eq!(d.session().output(), "3\n");

    let diag = &d.emitter().diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.message, "evaluation cycle: a -> b -> a");
}

#[test]
fn test_cycle_aborts_when_configured() {
    let mut d = driver().with_cycle_policy(CyclePolicy::Abort);
    let status = d.run(Cursor::new("a add a\nprint a\nb add 1\nprint b\n"));
    assert_eq!(status, ExitStatus::CycleAbort);
    assert_eq!(status.code(), 1);
    assert_eq!(d.session().output(), "");
    assert_eq!(d.lines_read(), 2);
}

#[test]
fn test_overflow_is_not_fatal_under_abort() {
    let mut d = driver().with_cycle_policy(CyclePolicy::Abort);
    let status = d.run(Cursor::new(
        "a add 9223372036854775807\na add 1\nprint a\nb add 2\nprint b\n",
    ));
    assert_eq!(status, ExitStatus::EndOfInput);
    assert_eq!(d.emitter().codes(), vec![ErrorCode::E2002]);
    assert_eq!(d.session().output(), "2\n");
}

#[test]
fn test_wrapping_session() {
    let session = Session::builder()
        .overflow(OverflowPolicy::Wrapping)
        .print_handler(buffer_handler())
        .build();
    let mut d = Driver::new(session, CollectingEmitter::new());
    d.run(Cursor::new("a add 9223372036854775807\na add 1\nprint a\n"));
    assert_eq!(d.session().output(), "-9223372036854775808\n");
}

struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device gone"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.served {
            Err(io::Error::other("device gone"))
        } else {
            Ok(b"a add 1\n")
        }
    }

    fn consume(&mut self, _amt: usize) {
        self.served = true;
    }
}

#[test]
fn test_read_failure() {
    let mut d = driver();
    let status = d.run(FailingReader { served: false });
    assert_eq!(status, ExitStatus::ReadError);
    assert!(!status.is_success());

    let diag = &d.emitter().diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E0003);
    assert_eq!(diag.line, Some(2));
}

#[test]
fn test_terminal_rendering() {
    let session = Session::builder().print_handler(buffer_handler()).build();
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let mut d = Driver::new(session, emitter);
    d.run(Cursor::new("print 5\n"));

    let (_, emitter) = d.into_parts();
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.starts_with("warning[E1004]: cannot print the number `5`\n  --> line 1\n"));
}
