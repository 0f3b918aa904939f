//! Fill-handle drag tests

mod common;

use common::{select, select_range, test_model};
use celltable::clipboard::ClipboardBridge;
use celltable::config::TableInit;
use celltable::messages::{Direction, EditMsg, HistoryMsg, Msg, PointerMsg, SelectionMsg};
use celltable::model::{Bounds, Cell, Coord, Selection, TableModel};
use celltable::update::update;

fn fill_down() -> Msg {
    Msg::Pointer(PointerMsg::FillHandleDown)
}

fn drag(row: usize, col: usize) -> Msg {
    Msg::Pointer(PointerMsg::Move(Coord::new(row, col)))
}

fn release() -> Msg {
    Msg::Pointer(PointerMsg::Up)
}

#[test]
fn test_fill_copies_anchor_value_in_one_step() {
    let mut model = test_model(&[vec!["X", "a", "b"], vec!["c", "d", "e"]]);
    select(&mut model, 0, 0);

    update(&mut model, fill_down());
    assert!(model.session.is_fill_dragging());
    update(&mut model, drag(0, 2));
    let cmd = update(&mut model, release()).unwrap();

    assert!(cmd.changes_cells());
    assert!(model.session.is_browsing());
    assert_eq!(model.values()[0], vec!["X", "X", "X"]);
    assert_eq!(model.values()[1], vec!["c", "d", "e"]);
    assert_eq!(model.history.undo_len(), 1);

    update(&mut model, Msg::History(HistoryMsg::Undo));
    assert_eq!(model.values()[0], vec!["X", "a", "b"]);
}

#[test]
fn test_fill_leaves_selection_alone() {
    let mut model = test_model(&[vec!["X", "a"], vec!["b", "c"]]);
    select(&mut model, 0, 0);

    update(&mut model, fill_down());
    update(&mut model, drag(1, 1));
    update(&mut model, release());

    assert_eq!(model.values(), vec![vec!["X", "X"], vec!["X", "X"]]);
    assert_eq!(model.selection, Some(Selection::single(Coord::new(0, 0))));
}

#[test]
fn test_fill_target_follows_pointer() {
    let mut model = test_model(&[vec!["X", "a", "b"]]);
    select(&mut model, 0, 0);

    update(&mut model, fill_down());
    update(&mut model, drag(0, 2));
    update(&mut model, drag(0, 1));

    let drag_state = model.session.fill_drag().copied().unwrap();
    assert_eq!(drag_state.bounds(), Bounds::new(0, 0, 0, 1));

    update(&mut model, release());
    assert_eq!(model.values(), vec![vec!["X", "X", "b"]]);
}

#[test]
fn test_fill_from_range_starts_with_range_target() {
    let mut model = test_model(&[vec!["X", "a", "b"]]);
    select_range(&mut model, (0, 0), (0, 1));

    update(&mut model, fill_down());
    update(&mut model, release());

    assert_eq!(model.values(), vec![vec!["X", "X", "b"]]);
}

#[test]
fn test_fill_past_edge_is_clamped() {
    let mut model = test_model(&[vec!["X", "a"]]);
    select(&mut model, 0, 0);

    update(&mut model, fill_down());
    update(&mut model, drag(7, 9));
    update(&mut model, release());

    assert_eq!(model.values(), vec![vec!["X", "X"]]);
}

#[test]
fn test_keys_are_ignored_during_fill() {
    let mut model = test_model(&[vec!["X", "a"], vec!["b", "c"]]);
    select(&mut model, 0, 0);
    update(&mut model, fill_down());

    assert_eq!(
        update(&mut model, Msg::Selection(SelectionMsg::Move(Direction::Down))),
        None
    );
    assert_eq!(update(&mut model, Msg::Edit(EditMsg::InsertChar('z'))), None);
    assert_eq!(update(&mut model, Msg::Edit(EditMsg::ClearCells)), None);
    assert_eq!(update(&mut model, Msg::History(HistoryMsg::Undo)), None);

    assert!(model.session.is_fill_dragging());
    assert_eq!(model.anchor(), Some(Coord::new(0, 0)));
}

#[test]
fn test_cancel_and_blur_apply_the_fill() {
    let mut model = test_model(&[vec!["X", "a"]]);
    select(&mut model, 0, 0);
    update(&mut model, fill_down());
    update(&mut model, drag(0, 1));
    update(&mut model, Msg::Pointer(PointerMsg::Cancel));
    assert!(model.session.is_browsing());
    assert_eq!(model.values(), vec![vec!["X", "X"]]);

    let mut model = test_model(&[vec!["Y", "a"]]);
    select(&mut model, 0, 0);
    update(&mut model, fill_down());
    update(&mut model, drag(0, 1));
    update(&mut model, Msg::FocusLost);
    assert!(model.session.is_browsing());
    assert_eq!(model.values(), vec![vec!["Y", "Y"]]);
}

#[test]
fn test_fill_onto_itself_records_nothing() {
    let mut model = test_model(&[vec!["X", "a"]]);
    select(&mut model, 0, 0);

    update(&mut model, fill_down());
    update(&mut model, release());

    assert!(model.session.is_browsing());
    assert!(!model.history.can_undo());
}

#[test]
fn test_fill_skips_locked_cells() {
    let init = TableInit {
        cells: vec![vec![
            Cell::with_value("X"),
            Cell::with_value("keep").locked(),
            Cell::with_value("b"),
        ]],
        ..TableInit::default()
    };
    let mut model = TableModel::new(init, ClipboardBridge::disconnected(), 10).unwrap();
    select(&mut model, 0, 0);

    update(&mut model, fill_down());
    update(&mut model, drag(0, 2));
    update(&mut model, release());

    assert_eq!(model.values(), vec![vec!["X", "keep", "X"]]);
}

#[test]
fn test_fill_handle_needs_selection() {
    let mut model = test_model(&[vec!["X"]]);
    assert_eq!(update(&mut model, fill_down()), None);
    assert!(model.session.is_browsing());
}

#[test]
fn test_fill_handle_commits_open_edit_first() {
    let mut model = test_model(&[vec!["a", "b"]]);
    select(&mut model, 0, 0);
    common::type_text(&mut model, "Z");

    update(&mut model, fill_down());
    update(&mut model, drag(0, 1));
    update(&mut model, release());

    assert_eq!(model.values(), vec![vec!["Z", "Z"]]);
    assert_eq!(model.history.undo_len(), 2);
}
