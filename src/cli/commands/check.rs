use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{self, WarningLocation};
use super::CommandContext;

/// Parse every message's type comment and report unrecognized types.
///
/// Unrecognized types are warnings and never stop the run. A malformed
/// comment is a hard error.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let lines = ctx.file.lines();
    let line_numbers = lines.line_numbers();

    let mut info_count = 0;
    let mut warning_count = 0;

    for message in ctx.file.messages() {
        let info = ctx.file.info(message)?;
        if !info.is_empty() {
            info_count += 1;
        }
        if info.warnings().is_empty() {
            continue;
        }

        // Warnings only come from a type comment, which sits right above the key.
        let Some(comment) = lines[message.first_line()].prev() else {
            continue;
        };
        let location = WarningLocation {
            file_path: &ctx.file_path,
            key: message.key(),
            line: line_numbers.get(&comment).copied().unwrap_or_default(),
            source_line: lines[comment].text(),
        };
        for warning in info.warnings() {
            report::print_warning(warning, &location);
            warning_count += 1;
        }
    }

    report::print_check_summary(ctx.file.len(), info_count, warning_count);

    Ok(if warning_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
