//! Output formatting functions.

pub mod pretty;

use clap::ValueEnum;

use crate::state::ShelfState;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Format the list state for output.
pub fn format_output(state: &ShelfState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(state).unwrap_or_default(),
        OutputFormat::Pretty => pretty::format_state(state),
    }
}
