//! Undo/redo tests

mod common;

use common::{numbered_model, select, select_range, test_model, type_text};
use celltable::clipboard::ClipboardBridge;
use celltable::commands::Cmd;
use celltable::config::{TableConfig, TableInit};
use celltable::messages::{EditMsg, HistoryMsg, Msg, StructureMsg};
use celltable::model::{Coord, TableModel};
use celltable::update::update;

fn undo() -> Msg {
    Msg::History(HistoryMsg::Undo)
}

fn redo() -> Msg {
    Msg::History(HistoryMsg::Redo)
}

fn set(model: &mut TableModel, row: usize, col: usize, text: &str) {
    select(model, row, col);
    type_text(model, text);
    update(model, Msg::Edit(EditMsg::Confirm));
}

#[test]
fn test_first_edit_is_undoable() {
    let mut model = test_model(&[vec!["a"]]);
    set(&mut model, 0, 0, "b");

    let cmd = update(&mut model, undo()).unwrap();

    assert_eq!(model.values(), vec![vec!["a"]]);
    assert!(cmd.changes_cells());
}

#[test]
fn test_undo_then_redo_round_trip() {
    let mut model = test_model(&[vec!["a", "b"]]);
    set(&mut model, 0, 0, "1");
    set(&mut model, 0, 1, "2");

    update(&mut model, undo());
    assert_eq!(model.values(), vec![vec!["1", "b"]]);
    update(&mut model, undo());
    assert_eq!(model.values(), vec![vec!["a", "b"]]);

    update(&mut model, redo());
    assert_eq!(model.values(), vec![vec!["1", "b"]]);
    update(&mut model, redo());
    assert_eq!(model.values(), vec![vec!["1", "2"]]);
    assert!(!model.history.can_redo());
}

#[test]
fn test_new_edit_clears_redo() {
    let mut model = test_model(&[vec!["a", "b"]]);
    set(&mut model, 0, 0, "1");
    update(&mut model, undo());
    assert!(model.history.can_redo());

    set(&mut model, 0, 1, "2");

    assert!(!model.history.can_redo());
    assert_eq!(update(&mut model, redo()), None);
    assert_eq!(model.values(), vec![vec!["a", "2"]]);
}

#[test]
fn test_empty_history_is_a_no_op() {
    let mut model = test_model(&[vec!["a"]]);
    assert_eq!(update(&mut model, undo()), None);
    assert_eq!(update(&mut model, redo()), None);
}

#[test]
fn test_history_is_bounded() {
    let init = TableInit::from_values(&[vec!["0"]]);
    let mut model = TableModel::new(init, ClipboardBridge::disconnected(), 3).unwrap();

    for i in 1..=5 {
        set(&mut model, 0, 0, &i.to_string());
    }
    assert_eq!(model.history.undo_len(), 3);

    while update(&mut model, undo()).is_some() {}
    assert_eq!(model.values(), vec![vec!["2"]]);
}

#[test]
fn test_undo_restores_structure_and_clamps_selection() {
    let mut model = numbered_model(2, 2, TableConfig::permissive());
    select(&mut model, 1, 1);
    update(&mut model, Msg::Structure(StructureMsg::AddRows));
    update(&mut model, Msg::Structure(StructureMsg::AddColumns));
    assert_eq!((model.grid.num_rows(), model.grid.num_columns()), (3, 3));

    select_range(&mut model, (2, 2), (2, 2));
    let cmd = update(&mut model, undo()).unwrap();

    assert_eq!(model.grid.num_columns(), 2);
    assert_eq!(model.anchor(), Some(Coord::new(2, 1)));
    assert!(cmd
        .into_vec()
        .iter()
        .any(|c| matches!(c, Cmd::SelectionChanged(Some(_)))));

    update(&mut model, undo());
    assert_eq!(model.grid.num_rows(), 2);
    assert_eq!(model.anchor(), Some(Coord::new(1, 1)));
}

#[test]
fn test_undo_commits_open_edit_first() {
    let mut model = test_model(&[vec!["a"]]);
    set(&mut model, 0, 0, "b");
    select(&mut model, 0, 0);
    type_text(&mut model, "c");

    update(&mut model, undo());

    assert!(model.session.is_browsing());
    assert_eq!(model.values(), vec![vec!["b"]]);
    assert_eq!(model.history.undo_len(), 1);
    assert_eq!(model.history.redo_len(), 1);
}

#[test]
fn test_selection_survives_undo_unchanged() {
    let mut model = test_model(&[vec!["a", "b"]]);
    set(&mut model, 0, 0, "z");
    select(&mut model, 0, 1);

    let cmd = update(&mut model, undo()).unwrap();

    assert_eq!(model.anchor(), Some(Coord::new(0, 1)));
    assert!(!cmd
        .into_vec()
        .iter()
        .any(|c| matches!(c, Cmd::SelectionChanged(_))));
}
