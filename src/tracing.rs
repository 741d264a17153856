//! Tracing setup and cursor-state diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=ded::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/ded/logs/ded.log` with daily rotation, at
//! debug level regardless of RUST_LOG.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Snapshot of cursor/selection/search state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub cursor: usize,
    pub row: usize,
    pub column: usize,
    pub selection: Option<(usize, usize)>,
    pub searching: bool,
}

impl CursorSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let cursor = model.clamped_cursor();
        Self {
            cursor,
            row: model.cursor_row(),
            column: model.cursor_column(),
            selection: model.selection_span(),
            searching: model.search.active,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.cursor != other.cursor {
            changes.push(format!(
                "cursor {} ({},{}) → {} ({},{})",
                self.cursor, self.row, self.column, other.cursor, other.row, other.column
            ));
        }
        if self.selection != other.selection {
            match other.selection {
                Some((begin, end)) => changes.push(format!("selection [{}, {}]", begin, end)),
                None => changes.push("selection cleared".to_string()),
            }
        }
        if self.searching != other.searching {
            let status = if other.searching { "started" } else { "stopped" };
            changes.push(format!("search {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(cursor: usize) -> CursorSnapshot {
        CursorSnapshot {
            cursor,
            row: 0,
            column: cursor,
            selection: None,
            searching: false,
        }
    }

    #[test]
    fn test_diff_identical_is_none() {
        assert_eq!(snapshot(3).diff(&snapshot(3)), None);
    }

    #[test]
    fn test_diff_reports_cursor_and_selection() {
        let before = snapshot(1);
        let mut after = snapshot(4);
        after.selection = Some((1, 4));
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cursor 1 (0,1) → 4 (0,4)"));
        assert!(diff.contains("selection [1, 4]"));
    }
}
