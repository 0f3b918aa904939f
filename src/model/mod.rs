//! Table model - the complete state of one grid editing engine
//!
//! All state types for the Elm-style update loop live here. The model is a
//! single owned aggregate; update handlers receive it by `&mut`.

pub mod cell;
pub mod grid;
pub mod header;
pub mod history;
pub mod selection;
pub mod session;

pub use cell::{Align, Cell};
pub use grid::{Axis, Grid, GridError, StructureError};
pub use header::{ColumnHeader, HeaderStyle, RowHeader, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
pub use selection::{Bounds, Coord, Selection};
pub use session::{CellEditState, Draft, EditSession, FillDrag};

use crate::clipboard::ClipboardBridge;
use crate::config::{TableConfig, TableInit};

/// The complete engine model
#[derive(Debug)]
pub struct TableModel {
    pub grid: Grid,
    /// `None` until the user selects something, and after structural deletes
    pub selection: Option<Selection>,
    pub history: History,
    pub clipboard: ClipboardBridge,
    pub session: EditSession,
    pub config: TableConfig,
    /// Pointer is held down on a cell and extending the selection
    pub drag_selecting: bool,
}

impl TableModel {
    /// Build a model from host data
    pub fn new(
        init: TableInit,
        clipboard: ClipboardBridge,
        history_limit: usize,
    ) -> Result<Self, GridError> {
        let (grid, config) = init.into_parts()?;
        Ok(Self {
            grid,
            selection: None,
            history: History::with_limit(history_limit),
            clipboard,
            session: EditSession::Browsing,
            config,
            drag_selecting: false,
        })
    }

    /// Replace grid and config from new host data.
    ///
    /// Clears history, selection and session. The clipboard buffer survives.
    pub fn reinitialize(&mut self, init: TableInit) -> Result<(), GridError> {
        let (grid, config) = init.into_parts()?;
        self.grid = grid;
        self.config = config;
        self.selection = None;
        self.history.clear();
        self.session = EditSession::Browsing;
        self.drag_selecting = false;
        Ok(())
    }

    /// The active cell
    pub fn anchor(&self) -> Option<Coord> {
        self.selection.map(|s| s.start)
    }

    pub fn selection_bounds(&self) -> Option<Bounds> {
        self.selection.map(|s| s.bounds())
    }

    pub fn is_cell_editable(&self, coord: Coord) -> bool {
        self.grid
            .is_cell_editable(coord.row, coord.col, self.config.cells_editable)
    }

    pub fn selection_has_editable(&self) -> bool {
        self.selection
            .is_some_and(|s| s.any_editable(&self.grid, self.config.cells_editable))
    }

    /// Plain cell values, row-major
    pub fn values(&self) -> Vec<Vec<String>> {
        self.grid
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.value.clone()).collect())
            .collect()
    }

    /// Check model invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let rows = self.grid.num_rows();
        let cols = self.grid.num_columns();
        assert!(rows >= 1 && cols >= 1, "[{}] grid is {}x{}", context, rows, cols);
        assert!(
            self.grid.rows().iter().all(|r| r.len() == cols),
            "[{}] grid is ragged",
            context
        );

        if let Some(sel) = self.selection {
            assert!(
                self.grid.in_bounds(sel.start) && self.grid.in_bounds(sel.end_or_start()),
                "[{}] selection {:?} outside {}x{} grid",
                context,
                sel,
                rows,
                cols
            );
        }

        match &self.session {
            EditSession::Editing(edit) => assert!(
                self.grid.in_bounds(edit.position),
                "[{}] editing {} outside grid",
                context,
                edit.position
            ),
            EditSession::FillDragging(drag) => assert!(
                self.grid.in_bounds(drag.origin) && self.grid.in_bounds(drag.target),
                "[{}] fill drag {:?} outside grid",
                context,
                drag
            ),
            EditSession::Browsing => {}
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
