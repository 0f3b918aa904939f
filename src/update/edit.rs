//! Cell editing update functions
//!
//! Browsing ⇄ Editing transitions, draft manipulation, and the content
//! mutations driven from the keyboard (confirm, Ctrl+Enter fill, clear).

use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::model::{Bounds, CellEditState, Coord, EditSession, Selection, TableModel};

use super::{blocked, commit_grid, merge, set_selection};

/// Handle edit messages
pub fn update_edit(model: &mut TableModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::StartEditing => start_editing(model),
        EditMsg::InsertChar(ch) => insert_char(model, ch),
        EditMsg::Confirm => confirm_edit(model),
        EditMsg::Cancel => cancel_edit(model),
        EditMsg::FillSelection => fill_selection_with_draft(model),
        EditMsg::ClearCells => clear_cells(model),
        EditMsg::DeleteBackward => edit_draft(model, |e| e.draft.delete_backward()),
        EditMsg::DeleteForward => edit_draft(model, |e| e.draft.delete_forward()),
        EditMsg::CursorLeft => edit_draft(model, |e| e.draft.move_left()),
        EditMsg::CursorRight => edit_draft(model, |e| e.draft.move_right()),
        EditMsg::CursorHome => edit_draft(model, |e| e.draft.move_home()),
        EditMsg::CursorEnd => edit_draft(model, |e| e.draft.move_end()),
    }
}

/// Enter Editing on `at`, seeded with the cell's current value
pub(crate) fn begin_edit(model: &mut TableModel, at: Coord) -> Option<Cmd> {
    if !model.session.is_browsing() {
        return blocked("start editing", "not browsing");
    }
    if !model.is_cell_editable(at) {
        return blocked("start editing", "cell not editable");
    }
    let value = model.grid.value(at.row, at.col).to_string();
    model.session = EditSession::Editing(CellEditState::new(at, value));
    tracing::debug!("Editing {}", at);
    Some(Cmd::Redraw)
}

fn start_editing(model: &mut TableModel) -> Option<Cmd> {
    let Some(anchor) = model.anchor() else {
        return blocked("start editing", "no selection");
    };
    begin_edit(model, anchor)
}

/// Typing: inserts into the draft, or starts an edit that replaces the value
fn insert_char(model: &mut TableModel, ch: char) -> Option<Cmd> {
    if ch.is_control() {
        return None;
    }

    if let Some(edit) = model.session.editing_mut() {
        edit.draft.insert_char(ch);
        return Some(Cmd::Redraw);
    }

    if !model.session.is_browsing() {
        return None;
    }
    let Some(anchor) = model.anchor() else {
        return blocked("type to edit", "no selection");
    };
    if !model.is_cell_editable(anchor) {
        return blocked("type to edit", "cell not editable");
    }
    let original = model.grid.value(anchor.row, anchor.col).to_string();
    model.session = EditSession::Editing(CellEditState::with_char(anchor, original, ch));
    Some(Cmd::Redraw)
}

/// Commit an in-progress edit without moving the selection.
///
/// Used whenever the editor loses focus. Returns `None` when not editing.
pub(crate) fn commit_edit(model: &mut TableModel) -> Option<Cmd> {
    let EditSession::Editing(edit) = std::mem::take(&mut model.session) else {
        return None;
    };

    if !edit.is_modified() || !model.is_cell_editable(edit.position) {
        return Some(Cmd::Redraw);
    }

    let mut next = model.grid.clone();
    next.set_cell_value(edit.position.row, edit.position.col, edit.draft.text());
    commit_grid(model, next).or(Some(Cmd::Redraw))
}

/// Enter while editing: commit and move one row down (clamped)
fn confirm_edit(model: &mut TableModel) -> Option<Cmd> {
    let Some(position) = model.session.editing().map(|e| e.position) else {
        return blocked("confirm edit", "not editing");
    };
    let committed = commit_edit(model);
    let below = position.offset(1, 0, &model.grid);
    merge(committed, set_selection(model, Some(Selection::single(below))))
}

/// Escape while editing: discard the draft
fn cancel_edit(model: &mut TableModel) -> Option<Cmd> {
    if !model.session.is_editing() {
        return None;
    }
    model.session = EditSession::Browsing;
    Some(Cmd::Redraw)
}

/// Ctrl+Enter: write the draft into every editable selected cell
fn fill_selection_with_draft(model: &mut TableModel) -> Option<Cmd> {
    let EditSession::Editing(edit) = std::mem::take(&mut model.session) else {
        return blocked("fill selection", "not editing");
    };

    let bounds = model
        .selection_bounds()
        .unwrap_or_else(|| Bounds::spanning(edit.position, edit.position));
    let mut next = model.grid.clone();
    let changed = next.fill(bounds, edit.draft.text(), model.config.cells_editable);
    tracing::debug!("Filled {} cells from draft", changed);
    commit_grid(model, next).or(Some(Cmd::Redraw))
}

/// Delete/Backspace while browsing: clear editable selected cells
fn clear_cells(model: &mut TableModel) -> Option<Cmd> {
    if !model.session.is_browsing() {
        return blocked("clear cells", "not browsing");
    }
    let Some(bounds) = model.selection_bounds() else {
        return blocked("clear cells", "no selection");
    };
    if !model.selection_has_editable() {
        return blocked("clear cells", "nothing editable in selection");
    }
    let mut next = model.grid.clone();
    next.fill(bounds, "", model.config.cells_editable);
    commit_grid(model, next)
}

fn edit_draft(model: &mut TableModel, f: impl FnOnce(&mut CellEditState)) -> Option<Cmd> {
    let edit = model.session.editing_mut()?;
    f(edit);
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardBridge;
    use crate::config::TableInit;

    fn model() -> TableModel {
        let init = TableInit::from_values(&[vec!["a", "b"], vec!["c", "d"]]);
        TableModel::new(init, ClipboardBridge::disconnected(), 10).unwrap()
    }

    #[test]
    fn test_commit_unchanged_draft_records_nothing() {
        let mut model = model();
        model.selection = Some(Selection::single(Coord::new(0, 0)));
        start_editing(&mut model);
        assert!(model.session.is_editing());

        commit_edit(&mut model);
        assert!(model.session.is_browsing());
        assert!(!model.history.can_undo());
    }

    #[test]
    fn test_control_chars_do_not_start_editing() {
        let mut model = model();
        model.selection = Some(Selection::single(Coord::new(0, 0)));
        assert_eq!(insert_char(&mut model, '\u{7}'), None);
        assert!(model.session.is_browsing());
    }

    #[test]
    fn test_clear_cells_requires_browsing() {
        let mut model = model();
        model.selection = Some(Selection::single(Coord::new(0, 0)));
        start_editing(&mut model);
        assert_eq!(clear_cells(&mut model), None);
        assert_eq!(model.grid.value(0, 0), "a");
    }
}
