use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, show::show, stats::stats, types::types},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Types(cmd)) => types(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
