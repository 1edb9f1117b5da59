//! Pure formatting functions for UI output.
//!
//! Each `format_*` function builds the line; the matching `display_*` function
//! prints it. Styling goes through `console`, which drops colours when the
//! stream is not a terminal.

use console::style;

use crate::boundary::StampWarning;
use crate::cli::orchestration::StampResult;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_stamp_warning(warning: &StampWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Build the summary shown after a stamp run.
///
/// Mentions the manifest, the version and how many placeholders were
/// replaced. Dry runs say the file was not written.
pub fn format_stamp_summary(result: &StampResult, placeholder: &str) -> String {
    let noun = if result.replacements == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    let action = if result.written {
        "Stamped"
    } else {
        "Would stamp"
    };
    format!(
        "{} {} with version {} ({} {} of '{}')",
        action,
        result.manifest.display(),
        style(&result.version).green().bold(),
        result.replacements,
        noun,
        placeholder
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Display a stamp warning on stderr.
pub fn display_stamp_warning(warning: &StampWarning) {
    eprintln!("{}", format_stamp_warning(warning));
}
