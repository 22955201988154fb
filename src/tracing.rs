//! Tracing setup and caret diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=softkeys::keymap=debug` - modifier transitions only
//! - `RUST_LOG=softkeys::widget=trace` - caret diffs for every key release
//!
//! # Log Files
//!
//! Logs are written to `~/.config/softkeys/logs/softkeys.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{CaretController, TextSurface};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to `~/.config/softkeys/logs/softkeys.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so stdout stays clean for the CLI's JSON output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "softkeys.log");
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

    // A second init (tests, embedding apps) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the caret state of a surface, for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretSnapshot {
    pub len: usize,
    pub start: usize,
    pub end: usize,
    pub column: Option<usize>,
}

impl CaretSnapshot {
    pub fn capture(surface: &dyn TextSurface, caret: &CaretController) -> Self {
        let selection = surface.selection();
        Self {
            len: surface.len_chars(),
            start: selection.start,
            end: selection.end,
            column: caret.column_memory().column(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &CaretSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if (self.start, self.end) != (other.start, other.end) {
            changes.push(format!(
                "selection: [{},{}) → [{},{})",
                self.start, self.end, other.start, other.end
            ));
        }
        if self.column != other.column {
            changes.push(format!("column: {:?} → {:?}", self.column, other.column));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
