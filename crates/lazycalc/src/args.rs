//! Command-line arguments.
//!
//! `lazycalc` takes at most one argument: the path of a file to read
//! commands from. Without it, commands come from standard input.

use std::fmt::Write as _;
use std::path::PathBuf;

use lc_diagnostic::ErrorCode;

use crate::config::{COLOR_ENV, CYCLES_ENV, LOG_ENV, OVERFLOW_ENV};
use crate::{CliError, InputSpec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(InputSpec),
    Help,
    Version,
}

/// Interpret the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    match args.as_slice() {
        [] => Ok(Invocation::Run(InputSpec::Stdin)),
        [flag] if flag == "--help" || flag == "-h" => Ok(Invocation::Help),
        [flag] if flag == "--version" || flag == "-V" => Ok(Invocation::Version),
        [path] => Ok(Invocation::Run(InputSpec::File(PathBuf::from(path)))),
        _ => Err(CliError::TooManyArguments { count: args.len() }),
    }
}

/// Help text printed for `--help`.
pub fn usage() -> String {
    let mut text = String::from(
        "Lazy register calculator\n\
         \n\
         Usage: lazycalc [FILE]\n\
         \n\
         Reads commands from FILE, or from standard input when no FILE is given.\n\
         \n\
         Commands:\n\
         \x20 <register> add|subtract|multiply <register|number>\n\
         \x20 print <register>\n\
         \x20 quit\n\
         \n\
         Environment:\n",
    );
    for (variable, values) in [
        (OVERFLOW_ENV, "checked | wrapping | saturating"),
        (CYCLES_ENV, "recover | abort"),
        (COLOR_ENV, "auto | always | never"),
        (LOG_ENV, "tracing filter, e.g. `debug` or `lc_eval=trace`"),
    ] {
        let _ = writeln!(text, "  {variable:<19} {values}");
    }
    text.push_str("\nDiagnostics:\n");
    for code in ErrorCode::ALL {
        let _ = writeln!(text, "  {code}  {}", code.description());
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_args_reads_stdin() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_args(empty).unwrap(), Invocation::Run(InputSpec::Stdin));
    }

    #[test]
    fn test_single_arg_is_file() {
        assert_eq!(
            parse_args(["input.txt"]).unwrap(),
            Invocation::Run(InputSpec::File(PathBuf::from("input.txt")))
        );
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse_args(["--help"]).unwrap(), Invocation::Help);
        assert_eq!(parse_args(["-h"]).unwrap(), Invocation::Help);
        assert_eq!(parse_args(["--version"]).unwrap(), Invocation::Version);
        assert_eq!(parse_args(["-V"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_too_many_args() {
        let err = parse_args(["a.txt", "b.txt"]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0002);
        assert!(matches!(err, CliError::TooManyArguments { count: 2 }));
        // A flag next to a file is still two arguments.
        assert!(parse_args(["--help", "a.txt"]).is_err());
    }

    #[test]
    fn test_usage_lists_every_code() {
        let text = usage();
        for code in ErrorCode::ALL {
            assert!(text.contains(code.as_str()), "missing {code}");
        }
        assert!(text.contains(OVERFLOW_ENV));
    }
}
