use anyhow::{Result, bail};

use super::super::args::ShowCommand;
use super::super::exit_status::ExitStatus;
use super::CommandContext;
use crate::core::CommentPolicy;

/// Print the lines of one message verbatim.
pub fn show(cmd: ShowCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;

    let Some(message) = ctx.file.get(&cmd.key) else {
        bail!("Key '{}' not found in {}", cmd.key, ctx.file_path);
    };

    let policy = if cmd.all_comments {
        CommentPolicy::AllPrecedingComments
    } else {
        ctx.config.comment_policy()
    };

    for line in ctx.file.message_lines(message, policy) {
        println!("{}", line.text());
    }

    if ctx.verbose {
        let placeholders: Vec<String> = message
            .placeholders(ctx.file.lines())
            .iter()
            .map(|index| format!("{{{}}}", index))
            .collect();
        eprintln!(
            "Note: placeholders used: {}",
            if placeholders.is_empty() {
                "none".to_string()
            } else {
                placeholders.join(", ")
            }
        );
    }

    Ok(ExitStatus::Success)
}
