//! Clipboard update functions (copy, cut, paste)

use crate::commands::Cmd;
use crate::messages::ClipboardMsg;
use crate::model::TableModel;

use super::edit::commit_edit;
use super::{blocked, commit_grid, merge};

/// Handle clipboard messages
pub fn update_clipboard(model: &mut TableModel, msg: ClipboardMsg) -> Option<Cmd> {
    match msg {
        ClipboardMsg::Copy => {
            let committed = commit_edit(model);
            merge(committed, copy_selection(model))
        }
        ClipboardMsg::Cut => {
            let committed = commit_edit(model);
            merge(committed, cut_selection(model))
        }
        ClipboardMsg::Paste => {
            let committed = commit_edit(model);
            merge(committed, paste(model))
        }
    }
}

fn copy_selection(model: &mut TableModel) -> Option<Cmd> {
    let Some(bounds) = model.selection_bounds() else {
        return blocked("copy", "no selection");
    };
    let text = model.clipboard.copy(&model.grid, bounds);
    tracing::debug!(
        "Copied {}x{} cells",
        bounds.row_count(),
        bounds.col_count()
    );
    Some(Cmd::Copied { text, bounds })
}

/// Copy, then clear the editable cells, as one history step
fn cut_selection(model: &mut TableModel) -> Option<Cmd> {
    let Some(bounds) = model.selection_bounds() else {
        return blocked("cut", "no selection");
    };
    if !model.selection_has_editable() {
        return blocked("cut", "nothing editable in selection");
    }

    let text = model.clipboard.copy(&model.grid, bounds);
    let mut next = model.grid.clone();
    next.fill(bounds, "", model.config.cells_editable);
    let changed = commit_grid(model, next);
    merge(changed, Some(Cmd::Cut { text, bounds }))
}

/// Paste at the anchor; values only, editable in-bounds cells only
fn paste(model: &mut TableModel) -> Option<Cmd> {
    let Some(anchor) = model.anchor() else {
        return blocked("paste", "no selection");
    };
    let Some(source) = model.clipboard.paste_source() else {
        return blocked("paste", "clipboard empty");
    };

    let rows = source.len();
    let cols = source.iter().map(Vec::len).max().unwrap_or(0);
    let mut next = model.grid.clone();
    let changed = next.paste_values(anchor, &source, model.config.cells_editable);
    tracing::debug!("Pasted {}x{} at {}, {} cells changed", rows, cols, anchor, changed);

    let committed = commit_grid(model, next);
    merge(committed, Some(Cmd::Pasted { anchor, rows, cols }))
}
