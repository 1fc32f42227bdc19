//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use docbridge_diagnostics::DocError;
use serde::Serialize;
use std::io::IsTerminal;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Colour preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Format an error for display
///
/// Type layer errors are rendered as diagnostics with their SQLSTATE code.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<DocError>() {
        Some(err) => err.to_diagnostic().render_colored(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Serialize a value as pretty JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}

/// Lower-case hex with the bytea `\x` prefix
pub fn hex(bytes: &[u8]) -> String {
    format!("\\x{}", ::hex::encode(bytes))
}

/// Parse `\x`-prefixed hex input
pub fn parse_hex(text: &str) -> Option<Vec<u8>> {
    ::hex::decode(text.strip_prefix("\\x")?).ok()
}
