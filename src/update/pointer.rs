//! Pointer update functions: click/drag selection, double-click editing,
//! and the fill-handle drag.

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::{Coord, EditSession, FillDrag, Selection, TableModel};

use super::edit::{begin_edit, commit_edit};
use super::{blocked, commit_grid, merge, set_selection};

/// Handle pointer messages
pub fn update_pointer(model: &mut TableModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down { coord, extend } => press(model, coord, extend),
        PointerMsg::Move(coord) => drag_to(model, coord),
        PointerMsg::Up | PointerMsg::Cancel => release(model),
        PointerMsg::DoubleClick(coord) => double_click(model, coord),
        PointerMsg::FillHandleDown => start_fill_drag(model),
    }
}

/// Press on a cell: commit any edit elsewhere, then select (or extend)
fn press(model: &mut TableModel, coord: Coord, extend: bool) -> Option<Cmd> {
    if !model.grid.in_bounds(coord) {
        return blocked("press", "outside grid");
    }
    if model.session.is_fill_dragging() {
        return None;
    }
    // Pressing inside the open editor moves its caret, not the selection
    if model.session.editing().is_some_and(|e| e.position == coord) {
        return None;
    }

    let committed = commit_edit(model);
    let next = match (extend, model.selection) {
        (true, Some(current)) => Selection::spanning(current.start, coord),
        _ => Selection::single(coord),
    };
    model.drag_selecting = true;
    merge(committed, set_selection(model, Some(next)))
}

/// Pointer entered `coord` while pressed
fn drag_to(model: &mut TableModel, coord: Coord) -> Option<Cmd> {
    let coord = model.grid.clamp(coord);

    if let EditSession::FillDragging(drag) = &mut model.session {
        if drag.target == coord {
            return None;
        }
        drag.target = coord;
        return Some(Cmd::Redraw);
    }

    if !model.drag_selecting {
        return None;
    }
    let anchor = model.selection.map(|s| s.start).unwrap_or(coord);
    set_selection(model, Some(Selection::spanning(anchor, coord)))
}

/// End of a press: apply a pending fill, stop drag-selecting
pub(crate) fn release(model: &mut TableModel) -> Option<Cmd> {
    model.drag_selecting = false;

    let EditSession::FillDragging(drag) = model.session else {
        return None;
    };
    model.session = EditSession::Browsing;
    apply_fill(model, drag).or(Some(Cmd::Redraw))
}

/// Copy the origin value into every editable target cell, as one step
fn apply_fill(model: &mut TableModel, drag: FillDrag) -> Option<Cmd> {
    let value = model
        .grid
        .value(drag.origin.row, drag.origin.col)
        .to_string();
    let mut next = model.grid.clone();
    let changed = next.fill(drag.bounds(), &value, model.config.cells_editable);
    tracing::debug!("Fill {:?} wrote {} cells", drag.bounds(), changed);
    commit_grid(model, next)
}

fn double_click(model: &mut TableModel, coord: Coord) -> Option<Cmd> {
    if !model.grid.in_bounds(coord) {
        return blocked("double click", "outside grid");
    }
    if model.session.editing().is_some_and(|e| e.position == coord) {
        return None;
    }
    let committed = commit_edit(model);
    model.drag_selecting = false;
    let selected = set_selection(model, Some(Selection::single(coord)));
    merge(merge(committed, selected), begin_edit(model, coord))
}

/// Press on the fill handle of the current selection
fn start_fill_drag(model: &mut TableModel) -> Option<Cmd> {
    let Some(selection) = model.selection else {
        return blocked("fill drag", "no selection");
    };
    let committed = commit_edit(model);
    let mut drag = FillDrag::new(selection.start);
    drag.target = selection.end_or_start();
    model.session = EditSession::FillDragging(drag);
    model.drag_selecting = false;
    merge(committed, Some(Cmd::Redraw))
}
