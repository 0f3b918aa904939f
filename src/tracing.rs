//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection, edit-session and history transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=celltable::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/celltable/logs/celltable.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{Selection, TableModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/celltable/logs/celltable.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so scripted output on stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
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

    // try_init: a host may have installed its own subscriber already
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of selection/session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub selection: Option<Selection>,
    pub session: &'static str,
    pub dimensions: (usize, usize),
    pub undo_len: usize,
    pub redo_len: usize,
}

impl SelectionSnapshot {
    pub fn from_model(model: &TableModel) -> Self {
        Self {
            selection: model.selection,
            session: model.session.name(),
            dimensions: (model.grid.num_rows(), model.grid.num_columns()),
            undo_len: model.history.undo_len(),
            redo_len: model.history.redo_len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.selection != other.selection {
            changes.push(format!(
                "selection: {} → {}",
                describe(self.selection),
                describe(other.selection)
            ));
        }
        if self.session != other.session {
            changes.push(format!("session: {} → {}", self.session, other.session));
        }
        if self.dimensions != other.dimensions {
            changes.push(format!(
                "grid: {}x{} → {}x{}",
                self.dimensions.0, self.dimensions.1, other.dimensions.0, other.dimensions.1
            ));
        }
        if (self.undo_len, self.redo_len) != (other.undo_len, other.redo_len) {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_len, self.redo_len, other.undo_len, other.redo_len
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(selection: Option<Selection>) -> String {
    match selection {
        None => "none".to_string(),
        Some(s) if s.is_single_cell() => s.start.to_string(),
        Some(s) => format!("{}..{}", s.start, s.end_or_start()),
    }
}
