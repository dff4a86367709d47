//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Parse every type comment and report unrecognized types
//! - `show`: Print the lines of one message
//! - `types`: List placeholder types for each message
//! - `stats`: Count how often each type is used
//! - `init`: Initialize proptypes configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
}

/// Common arguments shared by all file commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Properties file to read
    pub file: PathBuf,

    /// Key prefix of the messages to index (overrides config file)
    #[arg(long)]
    pub key_prefix: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Message key to show
    pub key: String,

    /// Include every comment line back to the previous message
    #[arg(long)]
    pub all_comments: bool,
}

#[derive(Debug, Args)]
pub struct TypesCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse all placeholder type comments and report unrecognized types
    Check(CheckCommand),
    /// Print a message together with its comments
    Show(ShowCommand),
    /// List the placeholder types of every message
    Types(TypesCommand),
    /// Count how often each placeholder type is used
    Stats(StatsCommand),
    /// Initialize a new .proptypesrc.json configuration file
    Init,
}
