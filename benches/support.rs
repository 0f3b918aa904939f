//! Shared helpers for benchmarks

use celltable::clipboard::ClipboardBridge;
use celltable::config::{TableConfig, TableInit};
use celltable::model::{Coord, Selection, TableModel};

/// Create a permissive TableModel with `rows` x `cols` filled cells
#[allow(dead_code)]
pub fn make_model(rows: usize, cols: usize) -> TableModel {
    let values: Vec<Vec<String>> = (0..rows)
        .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
        .collect();
    let init = TableInit::from_values(&values).with_config(TableConfig::permissive());
    TableModel::new(init, ClipboardBridge::disconnected(), 100).expect("bench grid")
}

/// Select a rectangle, anchor first
#[allow(dead_code)]
pub fn select(model: &mut TableModel, start: (usize, usize), end: (usize, usize)) {
    model.selection = Some(Selection::spanning(
        Coord::new(start.0, start.1),
        Coord::new(end.0, end.1),
    ));
}
