//! End-to-end tests: interaction scripts driven through a `Table`

use celltable::clipboard::{ClipboardBridge, MemoryClipboard};
use celltable::config::{TableConfig, TableInit};
use celltable::host::{HostEvent, RecordingHost};
use celltable::model::{Coord, Selection};
use celltable::script::{parse_script, run_steps};
use celltable::Table;

fn table(values: &[Vec<&str>]) -> (Table<RecordingHost>, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let init = TableInit::from_values(values).with_config(TableConfig::permissive());
    let bridge = ClipboardBridge::new(Box::new(clipboard.clone()));
    let table = Table::new(init, bridge, RecordingHost::new())
        .unwrap()
        .with_builtin_keymap();
    (table, clipboard)
}

fn run(table: &mut Table<RecordingHost>, script: &str) {
    let steps = parse_script(script).unwrap();
    run_steps(table, &steps);
}

#[test]
fn test_type_and_enter() {
    let (mut t, _) = table(&[vec!["a", "b"], vec!["c", "5"], vec!["e", "f"]]);

    run(
        &mut t,
        "
        # select, replace, confirm
        down 1 1
        up
        type 9
        key enter
        ",
    );

    assert_eq!(t.model().grid.value(1, 1), "9");
    assert_eq!(
        t.model().selection,
        Some(Selection::single(Coord::new(2, 1)))
    );
    assert_eq!(
        t.host().last_cells().unwrap()[1],
        vec!["c".to_string(), "9".to_string()]
    );
}

#[test]
fn test_escape_discards_typing() {
    let (mut t, _) = table(&[vec!["keep"]]);

    run(&mut t, "down 0 0\nup\ntype hello world\nkey escape");

    assert_eq!(t.model().values(), vec![vec!["keep"]]);
    assert!(t.host().last_cells().is_none());
}

#[test]
fn test_spaces_reach_the_draft() {
    let (mut t, _) = table(&[vec!["", ""]]);

    run(&mut t, "down 0 0\nup\ntype hello world\nkey tab");

    assert_eq!(t.model().values(), vec![vec!["hello world", ""]]);
    assert_eq!(t.model().anchor(), Some(Coord::new(0, 1)));
}

#[test]
fn test_copy_paste_with_shortcuts() {
    let (mut t, clipboard) = table(&[vec!["A", "B"], vec!["", ""]]);

    run(
        &mut t,
        "
        down 0 0
        shift-down 0 1
        up
        key cmd+c
        down 1 0
        up
        key cmd+v
        ",
    );

    assert_eq!(clipboard.text().as_deref(), Some("A\tB"));
    assert_eq!(t.model().values(), vec![vec!["A", "B"], vec!["A", "B"]]);
    let events = t.host_mut().take();
    assert!(events.contains(&HostEvent::Copied("A\tB".into())));
    assert!(events.contains(&HostEvent::Pasted {
        anchor: Coord::new(1, 0),
        rows: 1,
        cols: 2,
    }));
}

#[test]
fn test_fill_drag_ignores_keys() {
    let (mut t, _) = table(&[vec!["X", "a", "b"], vec!["c", "d", "e"]]);

    run(
        &mut t,
        "
        down 0 0
        up
        fill-handle
        key down
        key cmd+z
        move 0 2
        up
        ",
    );

    assert_eq!(t.model().values()[0], vec!["X", "X", "X"]);
    assert_eq!(t.model().anchor(), Some(Coord::new(0, 0)));

    run(&mut t, "key cmd+z");
    assert_eq!(t.model().values()[0], vec!["X", "a", "b"]);
}

#[test]
fn test_ctrl_enter_fills_selection() {
    let (mut t, _) = table(&[vec!["a", "b"], vec!["c", "d"]]);

    run(
        &mut t,
        "
        down 0 0
        move 1 1
        up
        type z
        key cmd+enter
        ",
    );

    assert_eq!(t.model().values(), vec![vec!["z", "z"], vec!["z", "z"]]);
    assert!(t.model().session.is_browsing());
}

#[test]
fn test_menu_structure_and_undo_redo() {
    let (mut t, _) = table(&[vec!["a", "b"], vec!["c", "d"]]);

    run(&mut t, "down 0 0\nup\nmenu add-rows\nmenu add-columns");
    assert_eq!(
        (t.model().grid.num_rows(), t.model().grid.num_columns()),
        (3, 3)
    );

    run(&mut t, "key cmd+z\nkey cmd+z");
    assert_eq!(t.model().values(), vec![vec!["a", "b"], vec!["c", "d"]]);

    run(&mut t, "key cmd+shift+z");
    assert_eq!(t.model().grid.num_rows(), 3);
}

#[test]
fn test_delete_rows_from_menu_clears_selection() {
    let (mut t, _) = table(&[vec!["a"], vec!["b"], vec!["c"]]);

    run(&mut t, "down 1 0\nup\nmenu delete-rows");

    assert_eq!(t.model().values(), vec![vec!["a"], vec!["c"]]);
    assert!(t.model().selection.is_none());
    let events = t.host_mut().take();
    assert!(events.contains(&HostEvent::RowsDeleted { start: 1, count: 1 }));
    assert!(events.contains(&HostEvent::SelectionChanged(None)));
}

#[test]
fn test_blur_commits_edit() {
    let (mut t, _) = table(&[vec!["a"]]);

    run(&mut t, "dblclick 0 0\nkey end\ntype !\nblur");

    assert_eq!(t.model().values(), vec![vec!["a!"]]);
    assert!(t.model().session.is_browsing());
}

#[test]
fn test_script_errors_name_the_line() {
    let err = parse_script("down 0 0\nup\nwiggle 3").unwrap_err();
    assert_eq!(err.line, 3);

    let err = parse_script("menu sideways").unwrap_err();
    assert!(err.message.contains("sideways"));

    assert!(parse_script("down 1").is_err());
}
