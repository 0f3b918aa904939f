//! celltable harness binary
//!
//! Loads a table, replays an interaction script through the engine exactly
//! as an embedding host would, and prints the resulting grid.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use celltable::config::{EngineConfig, TableConfig, TableInit};
use celltable::csv::{detect_delimiter, parse_csv, write_csv, Delimiter};
use celltable::host::RecordingHost;
use celltable::script::{parse_script, run_steps};
use celltable::table::Table;

mod cli;

use cli::{CliArgs, OutputFormat, TableFormat};

fn main() -> Result<()> {
    celltable::tracing::init();

    let args = CliArgs::parse();

    let mut engine = EngineConfig::load();
    if args.no_system_clipboard {
        engine.system_clipboard = false;
    }

    let init = load_table(&args.table, args.permissive)?;
    let mut table = Table::with_engine_config(init, &engine, RecordingHost::new())
        .with_context(|| format!("Invalid table in {}", args.table.display()))?;

    if let Some(script_path) = &args.script {
        let text = fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script {}", script_path.display()))?;
        let steps = parse_script(&text)?;
        tracing::info!("Replaying {} steps from {}", steps.len(), script_path.display());
        run_steps(&mut table, &steps);
    }

    if args.events {
        for event in &table.host().events {
            eprintln!("event: {}", event);
        }
    }

    let model = table.model();
    let output = match args.output {
        OutputFormat::Text => render_text(&model.values()),
        OutputFormat::Csv => write_csv(&model.values(), Delimiter::Comma)?,
        OutputFormat::Json => {
            let snapshot = TableInit {
                cells: model.grid.rows().to_vec(),
                column_headers: model.grid.column_headers().map(<[_]>::to_vec),
                row_headers: model.grid.row_headers().map(<[_]>::to_vec),
                config: model.config.clone(),
            };
            serde_json::to_string_pretty(&snapshot)? + "\n"
        }
    };
    print!("{}", output);

    Ok(())
}

/// Read a table file, picking the parser from its extension
fn load_table(path: &Path, permissive: bool) -> Result<TableInit> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let init = match TableFormat::from_path(path) {
        TableFormat::Json => TableInit::from_json(&text)?,
        TableFormat::Yaml => TableInit::from_yaml(&text)?,
        TableFormat::Delimited => {
            let delimiter = path
                .extension()
                .and_then(|e| e.to_str())
                .map(Delimiter::from_extension)
                .filter(|d| *d != Delimiter::Comma)
                .unwrap_or_else(|| detect_delimiter(&text));
            let rows = parse_csv(&text, delimiter)?;
            let config = if permissive {
                TableConfig::permissive()
            } else {
                TableConfig::default()
            };
            TableInit::from_values(&rows).with_config(config)
        }
    };
    Ok(init)
}

/// Left-aligned columns separated by two spaces
fn render_text(rows: &[Vec<String>]) -> String {
    let cols = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..cols)
        .map(|c| {
            rows.iter()
                .map(|r| r[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
