//! Keyboard selection movement

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::{Selection, TableModel};

use super::{blocked, set_selection};

/// Handle selection messages
pub fn update_selection(model: &mut TableModel, msg: SelectionMsg) -> Option<Cmd> {
    match msg {
        SelectionMsg::Move(dir) => {
            let (dr, dc) = dir.delta();
            move_selection(model, dr, dc)
        }
        SelectionMsg::Extend(dir) => {
            let (dr, dc) = dir.delta();
            extend_selection(model, dr, dc)
        }
        SelectionMsg::NextCell => move_selection(model, 0, 1),
        SelectionMsg::PrevCell => move_selection(model, 0, -1),
        SelectionMsg::SelectCell(coord) => {
            if !model.grid.in_bounds(coord) {
                return blocked("select cell", "outside grid");
            }
            set_selection(model, Some(Selection::single(coord)))
        }
        SelectionMsg::Clear => set_selection(model, None),
    }
}

/// Collapse to the anchor moved by the delta (clamped, no wrap)
fn move_selection(model: &mut TableModel, delta_row: isize, delta_col: isize) -> Option<Cmd> {
    let Some(current) = model.selection else {
        return blocked("move selection", "no selection");
    };
    let next = current.moved(delta_row, delta_col, &model.grid);
    set_selection(model, Some(next))
}

/// Move the far corner, keeping the anchor
fn extend_selection(model: &mut TableModel, delta_row: isize, delta_col: isize) -> Option<Cmd> {
    let Some(current) = model.selection else {
        return blocked("extend selection", "no selection");
    };
    let next = current.extended(delta_row, delta_col, &model.grid);
    set_selection(model, Some(next))
}
