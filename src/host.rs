//! Host callbacks
//!
//! The engine never renders or persists anything itself. Every committed
//! change is reported to the embedding host through [`TableHost`].

use crate::model::{Bounds, Cell, ColumnHeader, Coord, RowHeader, Selection};

/// Notifications from the engine to its host. All methods default to no-ops.
pub trait TableHost {
    /// Full cell matrix after a committed content or structural change
    fn on_cells_change(&mut self, _cells: &[Vec<Cell>]) {}

    fn on_column_headers_change(&mut self, _headers: &[ColumnHeader]) {}

    fn on_row_headers_change(&mut self, _headers: &[RowHeader]) {}

    fn on_selection_change(&mut self, _selection: Option<Selection>) {}

    fn on_rows_added(&mut self, _after: usize, _count: usize) {}

    fn on_columns_added(&mut self, _after: usize, _count: usize) {}

    fn on_rows_deleted(&mut self, _start: usize, _count: usize) {}

    fn on_columns_deleted(&mut self, _start: usize, _count: usize) {}

    /// A column resize gesture finished
    fn on_column_resized(&mut self, _index: usize, _width: u32) {}

    fn on_row_resized(&mut self, _index: usize, _height: u32) {}

    fn on_copy(&mut self, _text: &str, _bounds: Bounds) {}

    fn on_cut(&mut self, _text: &str, _bounds: Bounds) {}

    fn on_paste(&mut self, _anchor: Coord, _rows: usize, _cols: usize) {}

    /// Something visible changed that no other callback covers
    /// (draft text, fill preview)
    fn request_redraw(&mut self) {}
}

/// A host that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl TableHost for NullHost {}

/// One recorded host notification
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    CellsChanged(Vec<Vec<String>>),
    ColumnHeadersChanged(usize),
    RowHeadersChanged(usize),
    SelectionChanged(Option<Selection>),
    RowsAdded { after: usize, count: usize },
    ColumnsAdded { after: usize, count: usize },
    RowsDeleted { start: usize, count: usize },
    ColumnsDeleted { start: usize, count: usize },
    ColumnResized { index: usize, width: u32 },
    RowResized { index: usize, height: u32 },
    Copied(String),
    Cut(String),
    Pasted { anchor: Coord, rows: usize, cols: usize },
}

impl std::fmt::Display for HostEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostEvent::CellsChanged(rows) => {
                let cols = rows.first().map_or(0, Vec::len);
                write!(f, "cells changed ({}x{})", rows.len(), cols)
            }
            HostEvent::ColumnHeadersChanged(n) => write!(f, "column headers changed ({})", n),
            HostEvent::RowHeadersChanged(n) => write!(f, "row headers changed ({})", n),
            HostEvent::SelectionChanged(Some(sel)) => {
                let b = sel.bounds();
                write!(
                    f,
                    "selection {} rows {}..={} cols {}..={}",
                    sel.start, b.min_row, b.max_row, b.min_col, b.max_col
                )
            }
            HostEvent::SelectionChanged(None) => write!(f, "selection cleared"),
            HostEvent::RowsAdded { after, count } => {
                write!(f, "{} row(s) added after {}", count, after)
            }
            HostEvent::ColumnsAdded { after, count } => {
                write!(f, "{} column(s) added after {}", count, after)
            }
            HostEvent::RowsDeleted { start, count } => {
                write!(f, "{} row(s) deleted from {}", count, start)
            }
            HostEvent::ColumnsDeleted { start, count } => {
                write!(f, "{} column(s) deleted from {}", count, start)
            }
            HostEvent::ColumnResized { index, width } => {
                write!(f, "column {} resized to {}", index, width)
            }
            HostEvent::RowResized { index, height } => {
                write!(f, "row {} resized to {}", index, height)
            }
            HostEvent::Copied(text) => write!(f, "copied {:?}", text),
            HostEvent::Cut(text) => write!(f, "cut {:?}", text),
            HostEvent::Pasted { anchor, rows, cols } => {
                write!(f, "pasted {}x{} at {}", rows, cols, anchor)
            }
        }
    }
}

/// A host that records every notification in order
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    pub redraws: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events
    pub fn take(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent cell matrix reported, if any
    pub fn last_cells(&self) -> Option<&Vec<Vec<String>>> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::CellsChanged(rows) => Some(rows),
            _ => None,
        })
    }
}

impl TableHost for RecordingHost {
    fn on_cells_change(&mut self, cells: &[Vec<Cell>]) {
        let values = cells
            .iter()
            .map(|row| row.iter().map(|c| c.value.clone()).collect())
            .collect();
        self.events.push(HostEvent::CellsChanged(values));
    }

    fn on_column_headers_change(&mut self, headers: &[ColumnHeader]) {
        self.events
            .push(HostEvent::ColumnHeadersChanged(headers.len()));
    }

    fn on_row_headers_change(&mut self, headers: &[RowHeader]) {
        self.events.push(HostEvent::RowHeadersChanged(headers.len()));
    }

    fn on_selection_change(&mut self, selection: Option<Selection>) {
        self.events.push(HostEvent::SelectionChanged(selection));
    }

    fn on_rows_added(&mut self, after: usize, count: usize) {
        self.events.push(HostEvent::RowsAdded { after, count });
    }

    fn on_columns_added(&mut self, after: usize, count: usize) {
        self.events.push(HostEvent::ColumnsAdded { after, count });
    }

    fn on_rows_deleted(&mut self, start: usize, count: usize) {
        self.events.push(HostEvent::RowsDeleted { start, count });
    }

    fn on_columns_deleted(&mut self, start: usize, count: usize) {
        self.events.push(HostEvent::ColumnsDeleted { start, count });
    }

    fn on_column_resized(&mut self, index: usize, width: u32) {
        self.events.push(HostEvent::ColumnResized { index, width });
    }

    fn on_row_resized(&mut self, index: usize, height: u32) {
        self.events.push(HostEvent::RowResized { index, height });
    }

    fn on_copy(&mut self, text: &str, _bounds: Bounds) {
        self.events.push(HostEvent::Copied(text.to_string()));
    }

    fn on_cut(&mut self, text: &str, _bounds: Bounds) {
        self.events.push(HostEvent::Cut(text.to_string()));
    }

    fn on_paste(&mut self, anchor: Coord, rows: usize, cols: usize) {
        self.events.push(HostEvent::Pasted { anchor, rows, cols });
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}
