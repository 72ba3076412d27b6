//! Human-readable output for command results.
//!
//! Results go to stdout, warnings and errors to stderr. Every printer has a
//! `_to` variant taking a writer for tests.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::ops::{AddSummary, FileResult, FileStatus, GeneratedKey, LookupSummary, RemoveSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}

pub fn print_warnings(warnings: &[String]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

pub fn print_generated(generated: &GeneratedKey) {
    print_generated_to(generated, &mut io::stdout().lock());
}

pub fn print_generated_to<W: Write>(generated: &GeneratedKey, writer: &mut W) {
    let _ = writeln!(writer, "{}", generated.replacement);
}

pub fn print_add_summary(summary: &AddSummary) {
    print_add_summary_to(summary, &mut io::stdout().lock());
    print_warnings(&summary.warnings);
}

pub fn print_add_summary_to<W: Write>(summary: &AddSummary, writer: &mut W) {
    print_header(writer, summary.is_success(), &summary.key.to_string());
    let _ = writeln!(writer, "  replacement: {}", summary.replacement.cyan());
    for file in &summary.files {
        print_file_line(writer, file);
    }
    print_updated_count(writer, summary.updated_count, summary.files.len());
}

pub fn print_remove_summary(summary: &RemoveSummary) {
    print_remove_summary_to(summary, &mut io::stdout().lock());
    print_warnings(&summary.warnings);
}

pub fn print_remove_summary_to<W: Write>(summary: &RemoveSummary, writer: &mut W) {
    print_header(writer, summary.is_success(), &summary.key.to_string());
    let _ = writeln!(writer, "  restored: {}", summary.restored_text.cyan());
    for file in &summary.files {
        print_file_line(writer, file);
    }
    print_updated_count(writer, summary.updated_count, summary.files.len());
}

pub fn print_lookup_summary(summary: &LookupSummary) {
    print_lookup_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_lookup_summary_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    if summary.translations.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "No value found for {} in {} {}",
                summary.key,
                summary.files_searched,
                plural(summary.files_searched, "file", "files")
            )
            .red()
        );
        return;
    }

    print_header(writer, true, &summary.key.to_string());
    for found in &summary.translations {
        let _ = writeln!(
            writer,
            "  {}: {}",
            file_label(&found.file, found.language.as_deref()).bold(),
            found.value
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_header<W: Write>(writer: &mut W, success: bool, key: &str) {
    let mark = if success {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.yellow()
    };
    let _ = writeln!(writer, "{} {}", mark, key.bold());
}

fn print_file_line<W: Write>(writer: &mut W, result: &FileResult) {
    let label = file_label(&result.file, result.language.as_deref());
    let _ = match &result.status {
        FileStatus::Written {
            action,
            value,
            translated,
            reset,
        } => {
            let mut detail = action.as_str().to_string();
            if *translated {
                detail.push_str(&format!(", translated: \"{}\"", value));
            }
            if *reset {
                detail.push_str(", invalid content replaced");
            }
            writeln!(writer, "  {} {} {}", SUCCESS_MARK.green(), label, detail.dimmed())
        }
        FileStatus::Removed {
            matched_key,
            fallback,
            ..
        } => {
            let detail = if *fallback {
                format!("removed \"{}\"", matched_key)
            } else {
                "removed".to_string()
            };
            writeln!(writer, "  {} {} {}", SUCCESS_MARK.green(), label, detail.dimmed())
        }
        FileStatus::NotFound => writeln!(writer, "  {} {} {}", "-".dimmed(), label, "not found".dimmed()),
        FileStatus::Skipped { reason } => writeln!(
            writer,
            "  {} {} {}",
            FAILURE_MARK.yellow(),
            label,
            format!("skipped: {}", reason).yellow()
        ),
        FileStatus::Failed { error } => writeln!(
            writer,
            "  {} {} {}",
            FAILURE_MARK.red(),
            label,
            format!("failed: {}", error).red()
        ),
    };
}

fn print_updated_count<W: Write>(writer: &mut W, updated: usize, total: usize) {
    let _ = writeln!(
        writer,
        "Updated {} of {} {}",
        updated,
        total,
        plural(total, "file", "files")
    );
}

fn file_label(file: &str, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("{} ({})", file, language),
        None => file.to_string(),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
