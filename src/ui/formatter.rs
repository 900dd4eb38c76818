//! Formatting functions for progress and diagnostic output.
//!
//! Progress goes to stdout, diagnostics to stderr. Styling comes from
//! `console`, which drops colors automatically when the stream is not a tty.

use console::style;

/// Format and print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display one planned file edit.
pub fn display_edit(summary: &str) {
    println!("  {}", summary);
}

/// Display a command that a dry run skipped.
///
/// # Arguments
/// * `command_line` - Program and arguments joined by spaces
pub fn display_planned_command(command_line: &str) {
    println!("  {} {}", style("$").dim(), style(command_line).cyan());
}

/// Label of an in-progress step, e.g. `Checking working tree... `
pub fn step_label(label: &str) -> String {
    format!("{}... ", label)
}
