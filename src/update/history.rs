//! Undo/redo update functions

use crate::commands::Cmd;
use crate::messages::HistoryMsg;
use crate::model::TableModel;

use super::{blocked, merge, restore_grid, set_selection};

/// Handle history messages
pub fn update_history(model: &mut TableModel, msg: HistoryMsg) -> Option<Cmd> {
    let mut restored = match msg {
        HistoryMsg::Undo => {
            let current = model.grid.clone();
            match model.history.undo(current) {
                Some(grid) => grid,
                None => return blocked("undo", "nothing to undo"),
            }
        }
        HistoryMsg::Redo => {
            let current = model.grid.clone();
            match model.history.redo(current) {
                Some(grid) => grid,
                None => return blocked("redo", "nothing to redo"),
            }
        }
    };

    // Header sizes are not history; keep whatever the user resized to since
    restored.keep_sizes_from(&model.grid);
    let changed = restore_grid(model, restored);
    // Keep the selection inside a grid that may have shrunk
    let clamped = model.selection.map(|s| s.clamped(&model.grid));
    merge(Some(changed), set_selection(model, clamped))
}
