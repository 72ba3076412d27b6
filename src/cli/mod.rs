use std::process::ExitCode;

use anyhow::Result;

use crate::logging;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    logging::init(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    run::run(args).map(Into::into)
}
