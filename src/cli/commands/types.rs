use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::super::args::TypesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::format_info;
use super::CommandContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageTypes<'a> {
    key: &'a str,
    line: usize,
    value: String,
    placeholders: Vec<usize>,
    types: Vec<PlaceholderType>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceholderType {
    index: usize,
    kind: String,
    hint: String,
}

/// List each message key with its placeholder types.
pub fn types(cmd: TypesCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let lines = ctx.file.lines();

    let line_numbers = lines.line_numbers();

    if cmd.json {
        let mut entries = Vec::with_capacity(ctx.file.len());
        for message in ctx.file.messages() {
            let info = ctx.file.info(message)?;
            entries.push(MessageTypes {
                key: message.key(),
                line: line_numbers
                    .get(&message.first_line())
                    .copied()
                    .unwrap_or_default(),
                value: message.value(lines),
                placeholders: message.placeholders(lines).into_iter().collect(),
                types: info
                    .types()
                    .iter()
                    .enumerate()
                    .map(|(index, ty)| PlaceholderType {
                        index,
                        kind: ty.kind_name(),
                        hint: ty.implementation_hint(),
                    })
                    .collect(),
            });
        }
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize types")?;
        println!("{}", json);
        return Ok(ExitStatus::Success);
    }

    for message in ctx.file.messages() {
        let info = ctx.file.info(message)?;
        if info.is_empty() {
            println!("{} {}", message.key(), "(no type comment)".dimmed());
            continue;
        }
        println!("{}", message.key());
        for line in format_info(info) {
            println!("{}", line);
        }
    }

    Ok(ExitStatus::Success)
}
