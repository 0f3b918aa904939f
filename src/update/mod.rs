//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Handlers compute
//! the next grid from the current one and commit it in a single step, so a
//! message either fully applies or leaves the model untouched.

mod clipboard;
mod edit;
mod header;
mod history;
mod navigation;
mod pointer;
mod structure;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{Grid, Selection, TableModel};

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use clipboard::update_clipboard;
pub use edit::update_edit;
pub use header::update_header;
pub use history::update_history;
pub use navigation::update_selection;
pub use pointer::update_pointer;
pub use structure::update_structure;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut TableModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut TableModel, msg: Msg) -> Option<Cmd> {
    // A fill drag owns the pointer until release; keyboard and menu wait
    if model.session.is_fill_dragging()
        && !matches!(msg, Msg::Pointer(_) | Msg::Header(_) | Msg::FocusLost)
    {
        tracing::debug!("Ignoring {:?} during fill drag", msg);
        return None;
    }

    match msg {
        Msg::Selection(m) => {
            let committed = edit::commit_edit(model);
            merge(committed, navigation::update_selection(model, m))
        }
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Clipboard(m) => clipboard::update_clipboard(model, m),
        Msg::Structure(m) => {
            let committed = edit::commit_edit(model);
            merge(committed, structure::update_structure(model, m))
        }
        Msg::History(m) => {
            let committed = edit::commit_edit(model);
            merge(committed, history::update_history(model, m))
        }
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Header(m) => header::update_header(model, m),
        Msg::FocusLost => focus_lost(model),
    }
}

/// Focus left the table: commit any edit, release any drag
fn focus_lost(model: &mut TableModel) -> Option<Cmd> {
    let committed = edit::commit_edit(model);
    let released = pointer::release(model);
    merge(committed, released)
}

/// Commit a new grid as one history step.
///
/// Pushes the previous grid, swaps in `next`, and reports what changed.
/// Returns `None` (and records nothing) when `next` equals the current grid.
pub(crate) fn commit_grid(model: &mut TableModel, next: Grid) -> Option<Cmd> {
    if next == model.grid {
        tracing::debug!("Commit skipped: grid unchanged");
        return None;
    }
    let previous = std::mem::replace(&mut model.grid, next);
    let cmd = grid_changes(&previous, &model.grid);
    model.history.push(previous);
    Some(cmd)
}

/// Replace the grid wholesale without touching history (undo/redo)
pub(crate) fn restore_grid(model: &mut TableModel, grid: Grid) -> Cmd {
    let previous = std::mem::replace(&mut model.grid, grid);
    grid_changes(&previous, &model.grid)
}

/// Notifications describing the difference between two grids
pub(crate) fn grid_changes(before: &Grid, after: &Grid) -> Cmd {
    let mut cmds = Vec::new();
    if before.rows() != after.rows() {
        cmds.push(Cmd::CellsChanged(after.rows().to_vec()));
    }
    if before.column_headers() != after.column_headers() {
        if let Some(headers) = after.column_headers() {
            cmds.push(Cmd::ColumnHeadersChanged(headers.to_vec()));
        }
    }
    if before.row_headers() != after.row_headers() {
        if let Some(headers) = after.row_headers() {
            cmds.push(Cmd::RowHeadersChanged(headers.to_vec()));
        }
    }
    Cmd::batch(cmds)
}

/// Set the selection, reporting only real changes
pub(crate) fn set_selection(model: &mut TableModel, selection: Option<Selection>) -> Option<Cmd> {
    if model.selection == selection {
        return None;
    }
    model.selection = selection;
    Some(Cmd::SelectionChanged(selection))
}

/// Combine two optional commands into one
pub(crate) fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
    match (first, second) {
        (None, cmd) | (cmd, None) => cmd,
        (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
    }
}

/// Log a refused intent; always returns `None`
pub(crate) fn blocked(intent: &str, reason: &str) -> Option<Cmd> {
    tracing::debug!(intent, reason, "blocked");
    None
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut TableModel, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive at high frequency
    let is_noisy = matches!(&msg, Msg::Pointer(crate::messages::PointerMsg::Move(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SelectionSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Clipboard(m) => format!("Clipboard::{:?}", m),
        Msg::Structure(m) => format!("Structure::{:?}", m),
        Msg::History(m) => format!("History::{:?}", m),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Header(m) => format!("Header::{:?}", m),
        Msg::FocusLost => "FocusLost".to_string(),
    }
}
