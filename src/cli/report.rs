//! Report formatting and printing utilities.
//!
//! Warnings are printed cargo-style to stderr, results to stdout.
//! Kept apart from the core so proptypes can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{Info, UnknownType};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Where an unrecognized type was found.
pub struct WarningLocation<'a> {
    pub file_path: &'a str,
    pub key: &'a str,
    /// 1-based line of the type comment.
    pub line: usize,
    pub source_line: &'a str,
}

pub fn print_warning(warning: &UnknownType, location: &WarningLocation) {
    print_warning_to(warning, location, &mut io::stderr().lock());
}

pub fn print_warning_to<W: Write>(warning: &UnknownType, location: &WarningLocation, writer: &mut W) {
    let width = location.line.to_string().len();

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "warning".bold().yellow(),
        warning,
        location.key.dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        location.file_path,
        location.line
    );
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        location.line.to_string().blue(),
        "|".blue(),
        location.source_line,
        width = width
    );
    let _ = writeln!(writer);
}

/// Summary of a `check` run.
pub fn print_check_summary(message_count: usize, info_count: usize, warning_count: usize) {
    print_check_summary_to(
        message_count,
        info_count,
        warning_count,
        &mut io::stdout().lock(),
    );
}

pub fn print_check_summary_to<W: Write>(
    message_count: usize,
    info_count: usize,
    warning_count: usize,
    writer: &mut W,
) {
    let checked = format!(
        "Checked {} {} ({} with type comments)",
        message_count,
        if message_count == 1 {
            "message"
        } else {
            "messages"
        },
        info_count
    );

    if warning_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} - no issues found", checked).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} - {} {}",
            FAILURE_MARK.red(),
            checked,
            warning_count,
            if warning_count == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// One line per placeholder: `  {0}: symbol (Symbol)`.
pub fn format_info(info: &Info) -> Vec<String> {
    info.types()
        .iter()
        .enumerate()
        .map(|(index, ty)| {
            format!(
                "  {{{}}}: {} {}",
                index,
                ty,
                format!("({})", ty.implementation_hint()).dimmed()
            )
        })
        .collect()
}
