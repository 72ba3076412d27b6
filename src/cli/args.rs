//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `key`: Generate a key and replacement call for a piece of text
//! - `add`: Generate a key and write it into every translation file
//! - `remove`: Remove the key behind a `t('key')` call and print the original text
//! - `lookup`: Show the stored values for a key
//! - `init`: Initialize transkey configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{config::API_KEY_ENV, store::RemoveFallback};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Key(cmd)) => cmd.common.verbose,
            Some(Command::Add(cmd)) => cmd.common.verbose,
            Some(Command::Remove(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the config file search from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Function name used in generated calls (overrides config file)
    #[arg(long)]
    pub function: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct KeyCommand {
    /// The selected UI text
    pub text: String,

    /// File the text was selected in, used for the key namespace
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// The selected UI text
    pub text: String,

    /// File the text was selected in, used for the key namespace
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Translate into the other languages (overrides config file)
    #[arg(long, conflicts_with = "no_auto_translate")]
    pub auto_translate: bool,

    /// Write the source text to every file without translating
    #[arg(long)]
    pub no_auto_translate: bool,

    /// OpenAI API key (overrides config file)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// The selected call, e.g. "t('components.pages.saveChanges')"
    pub selection: String,

    /// How to match the key when it is not found exactly (overrides config file)
    #[arg(long, value_enum)]
    pub fallback: Option<RemoveFallback>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// A dotted key or a call like "t('key')"
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a translation key and replacement call for a piece of text
    Key(KeyCommand),
    /// Generate a key and add it to every translation file
    Add(AddCommand),
    /// Remove a key from every translation file and print the original text
    Remove(RemoveCommand),
    /// Show the values stored for a key in each translation file
    Lookup(LookupCommand),
    /// Initialize a new .transkeyrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
