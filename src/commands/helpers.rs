//! Helper functions shared across commands

use crate::cli::{Cli, OutputFormat};
use weft_core::error::{Result, WeftError};

/// Error for commands that have no HTML rendering.
///
/// Only `weft related` produces an HTML fragment.
pub fn html_not_supported(command: &str) -> WeftError {
    WeftError::UsageError(format!(
        "html output is only available for `weft related`, not `weft {}`",
        command
    ))
}

/// Reject `--format html` before a command does any work.
///
/// Commands that write to the store call this first so a format error
/// cannot leave a half-finished mutation behind.
pub fn reject_html(cli: &Cli, command: &str) -> Result<()> {
    if cli.format == OutputFormat::Html {
        return Err(html_not_supported(command));
    }
    Ok(())
}
