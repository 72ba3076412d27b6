use std::process::ExitCode;

use clap::Parser;
use transkey::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        transkey::logging::init(false);
        if let Err(err) = transkey::mcp::run_server() {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match transkey::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
