//! Output → json string formatting, plus error and status lines.
//!
//! Two modes:
//! - **Human** (default): results go through the executor's `display`
//!   writer; errors print as `(error) ...`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use std::path::Path;

use neodb_executor::{Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output as pretty JSON.
pub fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Confirmation after results were written to a CSV file.
pub fn format_written(path: &Path, rows: usize, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "written": rows,
            "path": path.display().to_string(),
        }))
        .unwrap_or_default(),
        OutputMode::Human => format!("Wrote {} rows to {}", rows, path.display()),
    }
}
