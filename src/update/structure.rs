//! Structural mutations: insert/delete whole rows and columns
//!
//! Blocks are sized by the selection's span. Insertions land right after the
//! selection; deletions remove the spanned rows/columns and clear the
//! selection.

use crate::commands::Cmd;
use crate::messages::StructureMsg;
use crate::model::TableModel;

use super::{blocked, commit_grid, merge, set_selection};

/// Handle structure messages
pub fn update_structure(model: &mut TableModel, msg: StructureMsg) -> Option<Cmd> {
    match msg {
        StructureMsg::AddRows => add_rows(model),
        StructureMsg::AddColumns => add_columns(model),
        StructureMsg::DeleteRows => delete_rows(model),
        StructureMsg::DeleteColumns => delete_columns(model),
    }
}

fn add_rows(model: &mut TableModel) -> Option<Cmd> {
    if !model.config.can_add_rows {
        return blocked("add rows", "not allowed by host");
    }
    let Some(bounds) = model.selection_bounds() else {
        return blocked("add rows", "no selection");
    };
    let (after, count) = (bounds.max_row, bounds.row_count());

    let mut next = model.grid.clone();
    if let Err(e) = next.insert_rows(after, count, model.config.max_rows) {
        return blocked("add rows", &e.to_string());
    }
    let changed = commit_grid(model, next);
    merge(changed, Some(Cmd::RowsAdded { after, count }))
}

fn add_columns(model: &mut TableModel) -> Option<Cmd> {
    if !model.config.can_add_columns {
        return blocked("add columns", "not allowed by host");
    }
    let Some(bounds) = model.selection_bounds() else {
        return blocked("add columns", "no selection");
    };
    let (after, count) = (bounds.max_col, bounds.col_count());

    let mut next = model.grid.clone();
    if let Err(e) = next.insert_columns(after, count, model.config.max_columns) {
        return blocked("add columns", &e.to_string());
    }
    let changed = commit_grid(model, next);
    merge(changed, Some(Cmd::ColumnsAdded { after, count }))
}

fn delete_rows(model: &mut TableModel) -> Option<Cmd> {
    if !model.config.can_delete_rows {
        return blocked("delete rows", "not allowed by host");
    }
    let Some(bounds) = model.selection_bounds() else {
        return blocked("delete rows", "no selection");
    };
    let (start, count) = (bounds.min_row, bounds.row_count());

    let mut next = model.grid.clone();
    if let Err(e) = next.delete_rows(bounds.rows(), model.config.min_rows) {
        return blocked("delete rows", &e.to_string());
    }
    let changed = commit_grid(model, next);
    let cleared = set_selection(model, None);
    merge(
        merge(changed, cleared),
        Some(Cmd::RowsDeleted { start, count }),
    )
}

fn delete_columns(model: &mut TableModel) -> Option<Cmd> {
    if !model.config.can_delete_columns {
        return blocked("delete columns", "not allowed by host");
    }
    let Some(bounds) = model.selection_bounds() else {
        return blocked("delete columns", "no selection");
    };
    let (start, count) = (bounds.min_col, bounds.col_count());

    let mut next = model.grid.clone();
    if let Err(e) = next.delete_columns(bounds.cols()) {
        return blocked("delete columns", &e.to_string());
    }
    let changed = commit_grid(model, next);
    let cleared = set_selection(model, None);
    merge(
        merge(changed, cleared),
        Some(Cmd::ColumnsDeleted { start, count }),
    )
}
