//! CLI layer: argument parsing, command dispatch, error reporting

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

use std::ffi::OsString;
use std::io;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

pub use args::Cli;
pub use error::{CliError, CliResult};

use crate::config::Settings;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;

/// First progress line of every run except completion generation.
pub const START_BANNER: &str = ".: pfxgen started :.";

/// Parse `args` and run one invocation, returning the process exit code.
pub fn run<I, T>(args: I, settings: Settings) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => run_cli(&cli, settings),
        Err(e) => report_parse_error(e),
    }
}

/// Run one invocation from already parsed arguments.
pub fn run_cli(cli: &Cli, settings: Settings) -> i32 {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return exitcode::OK;
    }

    output::header(START_BANNER);
    let container = ServiceContainer::new(settings);
    match commands::execute_command(cli, &container) {
        Ok(outcome) => {
            debug!("finished: {:?}", outcome);
            output::header(".: done :.");
            exitcode::OK
        }
        Err(e) => report(&e),
    }
}

/// Report a clap failure. Help and version requests are not failures.
///
/// The start banner comes first, as for a run whose arguments parsed.
pub fn report_parse_error(e: clap::Error) -> i32 {
    output::header(START_BANNER);
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            e.print().ok();
            exitcode::OK
        }
        _ => report(&CliError::from(e)),
    }
}

fn report(e: &CliError) -> i32 {
    match e {
        CliError::Parse(inner) => {
            inner.print().ok();
        }
        CliError::App(_) => {
            output::error(e);
            if e.shows_usage() {
                output::usage(&usage_banner());
            }
        }
    }
    e.exit_code()
}

/// Usage line followed by every option, shown after a validation failure.
pub fn usage_banner() -> String {
    Cli::command().render_help().to_string()
}
