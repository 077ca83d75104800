//! Lazycalc command-line entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use lc_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lc_eval::{stdout_handler, Session};

use lazycalc::{init_tracing, parse_args, usage, CliError, Config, Driver, Invocation};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => return fail(&err, ColorMode::Auto),
    };
    if let Err(err) = init_tracing() {
        return fail(&err, config.color);
    }

    match parse_args(std::env::args().skip(1)) {
        Ok(Invocation::Help) => {
            print!("{}", usage());
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("lazycalc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Ok(Invocation::Run(spec)) => {
            let input = match spec.open() {
                Ok(input) => input,
                Err(err) => return fail(&err, config.color),
            };
            tracing::debug!(?spec, overflow = %config.overflow, cycles = ?config.cycles, "starting session");

            let session = Session::builder()
                .overflow(config.overflow)
                .print_handler(stdout_handler())
                .build();
            let mut driver =
                Driver::new(session, stderr_emitter(config.color)).with_cycle_policy(config.cycles);
            ExitCode::from(driver.run(input).code())
        }
        Err(err) => fail(&err, config.color),
    }
}

fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    TerminalEmitter::with_color_mode(stderr, color, is_tty)
}

fn fail(err: &CliError, color: ColorMode) -> ExitCode {
    let mut emitter = stderr_emitter(color);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    ExitCode::FAILURE
}
