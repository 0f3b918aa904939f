//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use celltable::clipboard::{ClipboardBridge, MemoryClipboard};
use celltable::config::{TableConfig, TableInit};
use celltable::messages::{Msg, PointerMsg};
use celltable::model::{Coord, Selection, TableModel};
use celltable::update::update;

/// Create a test model from plain values with everything allowed
pub fn test_model(values: &[Vec<&str>]) -> TableModel {
    test_model_with_config(values, TableConfig::permissive())
}

pub fn test_model_with_config(values: &[Vec<&str>], config: TableConfig) -> TableModel {
    let init = TableInit::from_values(values).with_config(config);
    TableModel::new(init, ClipboardBridge::disconnected(), 100).expect("valid test grid")
}

/// Create a test model wired to an in-memory clipboard.
/// The returned handle shares contents with the engine's port.
pub fn test_model_with_clipboard(values: &[Vec<&str>]) -> (TableModel, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let init = TableInit::from_values(values).with_config(TableConfig::permissive());
    let bridge = ClipboardBridge::new(Box::new(clipboard.clone()));
    let model = TableModel::new(init, bridge, 100).expect("valid test grid");
    (model, clipboard)
}

/// A rows x cols grid whose cells read "r,c"
pub fn numbered_values(rows: usize, cols: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| format!("{},{}", r, c)).collect())
        .collect()
}

pub fn numbered_model(rows: usize, cols: usize, config: TableConfig) -> TableModel {
    let values = numbered_values(rows, cols);
    let init = TableInit::from_values(&values).with_config(config);
    TableModel::new(init, ClipboardBridge::disconnected(), 100).expect("valid test grid")
}

/// Select a single cell directly
pub fn select(model: &mut TableModel, row: usize, col: usize) {
    model.selection = Some(Selection::single(Coord::new(row, col)));
}

/// Select a rectangle directly (anchor first)
pub fn select_range(model: &mut TableModel, start: (usize, usize), end: (usize, usize)) {
    model.selection = Some(Selection::spanning(
        Coord::new(start.0, start.1),
        Coord::new(end.0, end.1),
    ));
}

/// Press and release on a cell
pub fn click(model: &mut TableModel, row: usize, col: usize) {
    update(
        model,
        Msg::Pointer(PointerMsg::Down {
            coord: Coord::new(row, col),
            extend: false,
        }),
    );
    update(model, Msg::Pointer(PointerMsg::Up));
}

/// Run several messages in order
pub fn send_all(model: &mut TableModel, msgs: &[Msg]) {
    for msg in msgs {
        update(model, *msg);
    }
}

/// Type text into the table (each char as InsertChar)
pub fn type_text(model: &mut TableModel, text: &str) {
    for ch in text.chars() {
        update(
            model,
            Msg::Edit(celltable::messages::EditMsg::InsertChar(ch)),
        );
    }
}
