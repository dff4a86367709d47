use anyhow::Result;

use super::super::args::StatsCommand;
use super::super::exit_status::ExitStatus;
use super::CommandContext;
use crate::core::TypeStats;

/// Print how often each type kind is used, most used first.
pub fn stats(cmd: StatsCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;

    let mut stats = TypeStats::new();
    for message in ctx.file.messages() {
        stats.add_info(ctx.file.info(message)?);
    }

    let entries = stats.sorted();
    let width = entries
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(1);

    for (name, count) in entries {
        println!("{:>width$}  {}", count, name, width = width);
    }

    Ok(ExitStatus::Success)
}
