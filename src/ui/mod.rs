//! User interface module - step progress and formatting.
//!
//! Separates concerns:
//! - `formatter` - Formatting functions
//! - This module - `label... result` step lines that need an explicit flush

use std::io::{self, Write};

use console::style;

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_edit, display_error, display_planned_command, display_status, display_success,
};

/// Start a progress line without a newline, e.g. `Checking working tree... `.
///
/// The line is completed by [finish_step] or [fail_step].
pub fn begin_step(label: &str) -> Result<()> {
    print!("{}", formatter::step_label(label));
    io::stdout().flush()?;
    Ok(())
}

/// Complete a progress line with a successful result.
pub fn finish_step(result: &str) {
    println!("{}", style(result).green());
}

/// Complete a progress line with a failed result.
///
/// The diagnostic itself goes to stderr separately.
pub fn fail_step(result: &str) {
    println!("{}", style(result).red());
}
