//! Dispatches a parsed command line to its command handler.
//!
//! Returns the exit status the process should end with. `Err` is reserved for
//! failures outside the command's own reporting, e.g. an unreadable config
//! file, and maps to [`ExitStatus::Error`].

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{add::add, init::init, key::key, lookup::lookup, remove::remove},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Key(cmd)) => key(cmd),
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Remove(cmd)) => remove(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
