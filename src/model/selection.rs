//! Rectangular cell selection
//!
//! A selection is an anchor (`start`, also the active cell) plus an optional
//! extension point (`end`). The normalized rectangle is derived on demand so
//! the anchor is never lost.

use std::ops::RangeInclusive;

use super::grid::Grid;

/// A (row, column) position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, saturating at zero and clamped to the grid
    pub fn offset(self, delta_row: isize, delta_col: isize, grid: &Grid) -> Self {
        let row = self.row.saturating_add_signed(delta_row);
        let col = self.col.saturating_add_signed(delta_col);
        grid.clamp(Coord::new(row, col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Normalized inclusive rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Bounds {
    pub fn new(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Self {
        Self {
            min_row: min_row.min(max_row),
            max_row: min_row.max(max_row),
            min_col: min_col.min(max_col),
            max_col: min_col.max(max_col),
        }
    }

    /// Rectangle spanned by two corners in any order
    pub fn spanning(a: Coord, b: Coord) -> Self {
        Self::new(a.row, b.row, a.col, b.col)
    }

    pub fn row_count(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn col_count(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.min_row..=self.max_row
    }

    pub fn cols(&self) -> RangeInclusive<usize> {
        self.min_col..=self.max_col
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }

    /// Top-left corner
    pub fn origin(&self) -> Coord {
        Coord::new(self.min_row, self.min_col)
    }

    /// Clip to a grid of the given size (which is never empty)
    pub fn clipped(&self, num_rows: usize, num_columns: usize) -> Self {
        let last_row = num_rows.saturating_sub(1);
        let last_col = num_columns.saturating_sub(1);
        Self::new(
            self.min_row.min(last_row),
            self.max_row.min(last_row),
            self.min_col.min(last_col),
            self.max_col.min(last_col),
        )
    }

    /// All coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| Coord::new(row, col)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Anchor and active cell
    pub start: Coord,
    /// Extension point; `None` means a single cell
    pub end: Option<Coord>,
}

impl Selection {
    pub fn single(at: Coord) -> Self {
        Self {
            start: at,
            end: None,
        }
    }

    pub fn spanning(start: Coord, end: Coord) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn end_or_start(&self) -> Coord {
        self.end.unwrap_or(self.start)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::spanning(self.start, self.end_or_start())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.bounds().contains(row, col)
    }

    pub fn is_single_cell(&self) -> bool {
        self.end.map_or(true, |end| end == self.start)
    }

    /// True when at least one cell of the rectangle can be edited
    pub fn any_editable(&self, grid: &Grid, cells_editable: bool) -> bool {
        cells_editable
            && self
                .bounds()
                .cells()
                .any(|c| grid.is_cell_editable(c.row, c.col, cells_editable))
    }

    /// Collapse to one cell moved by the delta from the anchor
    pub fn moved(&self, delta_row: isize, delta_col: isize, grid: &Grid) -> Self {
        Self::single(self.start.offset(delta_row, delta_col, grid))
    }

    /// Keep the anchor, move the extension point from where it currently is
    pub fn extended(&self, delta_row: isize, delta_col: isize, grid: &Grid) -> Self {
        Self::spanning(
            self.start,
            self.end_or_start().offset(delta_row, delta_col, grid),
        )
    }

    /// Clamp both corners into the grid (after a structural change)
    pub fn clamped(&self, grid: &Grid) -> Self {
        Self {
            start: grid.clamp(self.start),
            end: self.end.map(|e| grid.clamp(e)),
        }
    }
}
