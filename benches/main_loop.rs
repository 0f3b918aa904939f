//! Benchmarks for the Msg → Update → Cmd loop
//!
//! Every committed mutation clones the grid for history, so these track how
//! that cost scales with table size.
//!
//! Run with: cargo bench main_loop

mod support;
use support::{make_model, select};

use celltable::messages::{
    ClipboardMsg, Direction, EditMsg, HistoryMsg, Msg, PointerMsg, SelectionMsg, StructureMsg,
};
use celltable::model::Coord;
use celltable::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Selection (no grid mutation)
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_move_selection(iterations: usize) {
    let mut model = make_model(200, 20);
    select(&mut model, (0, 0), (0, 0));

    for i in 0..iterations {
        let dir = if i % 2 == 0 {
            Direction::Down
        } else {
            Direction::Right
        };
        let cmd = update(&mut model, Msg::Selection(SelectionMsg::Move(dir)));
        divan::black_box(cmd);
    }
}

#[divan::bench(args = [100, 1000])]
fn update_drag_selection(iterations: usize) {
    let mut model = make_model(200, 20);
    update(
        &mut model,
        Msg::Pointer(PointerMsg::Down {
            coord: Coord::new(0, 0),
            extend: false,
        }),
    );

    for i in 0..iterations {
        let coord = Coord::new(i % 200, i % 20);
        divan::black_box(update(&mut model, Msg::Pointer(PointerMsg::Move(coord))));
    }
}

// ============================================================================
// Committed mutations (snapshot per step)
// ============================================================================

#[divan::bench(args = [(10, 10), (100, 20), (1000, 20)])]
fn commit_edit(size: (usize, usize)) {
    let mut model = make_model(size.0, size.1);
    select(&mut model, (0, 0), (0, 0));

    for ch in "value".chars() {
        update(&mut model, Msg::Edit(EditMsg::InsertChar(ch)));
    }
    divan::black_box(update(&mut model, Msg::Edit(EditMsg::Confirm)));
}

#[divan::bench(args = [(100, 20), (1000, 20)])]
fn copy_paste_block(size: (usize, usize)) {
    let mut model = make_model(size.0, size.1);
    select(&mut model, (0, 0), (size.0 / 2 - 1, size.1 - 1));
    update(&mut model, Msg::Clipboard(ClipboardMsg::Copy));

    select(&mut model, (size.0 / 2, 0), (size.0 / 2, 0));
    divan::black_box(update(&mut model, Msg::Clipboard(ClipboardMsg::Paste)));
}

#[divan::bench(args = [(100, 20), (1000, 20)])]
fn add_rows_then_undo_redo(size: (usize, usize)) {
    let mut model = make_model(size.0, size.1);
    select(&mut model, (0, 0), (9, 0));

    update(&mut model, Msg::Structure(StructureMsg::AddRows));
    divan::black_box(update(&mut model, Msg::History(HistoryMsg::Undo)));
    divan::black_box(update(&mut model, Msg::History(HistoryMsg::Redo)));
}
