//! Grid store: the 2-D cell matrix plus optional header metadata
//!
//! The grid is always rectangular and never smaller than 1×1. Structural
//! operations validate first and either apply completely or return an error
//! without touching the grid.

use std::fmt;
use std::ops::RangeInclusive;

use super::cell::Cell;
use super::header::{ColumnHeader, RowHeader, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
use super::selection::{Bounds, Coord};

/// Which grid dimension an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Columns => write!(f, "columns"),
        }
    }
}

/// Host data that cannot form a valid grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without cells
    Empty,
    /// A row whose length differs from the first row
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A header array whose length differs from the grid dimension
    HeaderLengthMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row and one column"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::HeaderLengthMismatch {
                axis,
                expected,
                found,
            } => write!(
                f,
                "{} headers: found {}, grid has {}",
                axis, found, expected
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A structural mutation the grid refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Result would exceed the host's max rows/columns
    CapacityExceeded {
        axis: Axis,
        limit: usize,
        requested: usize,
    },
    /// Result would drop below the floor (one row/column, or min rows)
    MinimumSizeViolation {
        axis: Axis,
        minimum: usize,
        remaining: usize,
    },
    /// Insertion point or deletion range outside the grid
    OutOfBounds { axis: Axis, index: usize, len: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::CapacityExceeded {
                axis,
                limit,
                requested,
            } => write!(f, "{} {} would exceed the limit of {}", requested, axis, limit),
            StructureError::MinimumSizeViolation {
                axis,
                minimum,
                remaining,
            } => write!(
                f,
                "only {} {} would remain, minimum is {}",
                remaining, axis, minimum
            ),
            StructureError::OutOfBounds { axis, index, len } => {
                write!(f, "{} index {} out of bounds (len {})", axis, index, len)
            }
        }
    }
}

impl std::error::Error for StructureError {}

/// The cell matrix and its header metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    column_headers: Option<Vec<ColumnHeader>>,
    row_headers: Option<Vec<RowHeader>>,
}

impl Grid {
    /// Build a grid from host data, validating shape and header lengths
    pub fn new(
        rows: Vec<Vec<Cell>>,
        column_headers: Option<Vec<ColumnHeader>>,
        row_headers: Option<Vec<RowHeader>>,
    ) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }

        if let Some(headers) = &column_headers {
            if headers.len() != width {
                return Err(GridError::HeaderLengthMismatch {
                    axis: Axis::Columns,
                    expected: width,
                    found: headers.len(),
                });
            }
        }

        if let Some(headers) = &row_headers {
            if headers.len() != rows.len() {
                return Err(GridError::HeaderLengthMismatch {
                    axis: Axis::Rows,
                    expected: rows.len(),
                    found: headers.len(),
                });
            }
        }

        Ok(Self {
            rows,
            column_headers,
            row_headers,
        })
    }

    /// Build a header-less grid from plain values
    pub fn from_values<S: AsRef<str>>(values: &[Vec<S>]) -> Result<Self, GridError> {
        let rows = values
            .iter()
            .map(|row| row.iter().map(|v| Cell::with_value(v.as_ref())).collect())
            .collect();
        Self::new(rows, None, None)
    }

    /// A grid of empty cells (dimensions are floored at 1)
    pub fn blank(num_rows: usize, num_columns: usize) -> Self {
        Self {
            rows: vec![vec![Cell::empty(); num_columns.max(1)]; num_rows.max(1)],
            column_headers: None,
            row_headers: None,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.rows[0].len()
    }

    /// Bounds covering the whole grid
    pub fn full_bounds(&self) -> Bounds {
        Bounds::new(0, self.num_rows() - 1, 0, self.num_columns() - 1)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_headers(&self) -> Option<&[ColumnHeader]> {
        self.column_headers.as_deref()
    }

    pub fn row_headers(&self) -> Option<&[RowHeader]> {
        self.row_headers.as_deref()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.num_rows() && coord.col < self.num_columns()
    }

    /// Clamp a coordinate into the grid
    pub fn clamp(&self, coord: Coord) -> Coord {
        Coord::new(
            coord.row.min(self.num_rows() - 1),
            coord.col.min(self.num_columns() - 1),
        )
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Cell value, or "" outside the grid
    pub fn value(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).map(|c| c.value.as_str()).unwrap_or("")
    }

    /// Editable = table-wide flag set, in bounds, and not locked per cell
    pub fn is_cell_editable(&self, row: usize, col: usize, cells_editable: bool) -> bool {
        cells_editable && self.cell(row, col).is_some_and(Cell::is_editable)
    }

    /// Set a cell's value. Returns true if the value changed.
    pub fn set_cell_value(&mut self, row: usize, col: usize, value: &str) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if cell.value != value => {
                cell.value = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Write `value` into every editable cell of `bounds`; returns the number changed
    pub fn fill(&mut self, bounds: Bounds, value: &str, cells_editable: bool) -> usize {
        let mut changed = 0;
        for Coord { row, col } in bounds.cells() {
            if self.is_cell_editable(row, col, cells_editable) && self.set_cell_value(row, col, value)
            {
                changed += 1;
            }
        }
        changed
    }

    /// Copy a rectangle of cells out of the grid (clipped to the grid)
    pub fn extract(&self, bounds: Bounds) -> Vec<Vec<Cell>> {
        let bounds = bounds.clipped(self.num_rows(), self.num_columns());
        self.rows[bounds.rows()]
            .iter()
            .map(|row| row[bounds.cols()].to_vec())
            .collect()
    }

    /// Paste source values with their top-left at `anchor`.
    ///
    /// Destination cells that are out of bounds or not editable are skipped.
    /// Returns the number of cells whose value changed.
    pub fn paste_values(&mut self, anchor: Coord, source: &[Vec<Cell>], cells_editable: bool) -> usize {
        let mut changed = 0;
        for (dr, src_row) in source.iter().enumerate() {
            for (dc, src) in src_row.iter().enumerate() {
                let (row, col) = (anchor.row + dr, anchor.col + dc);
                if self.is_cell_editable(row, col, cells_editable)
                    && self.set_cell_value(row, col, &src.value)
                {
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Insert `count` empty rows immediately after row `after`
    pub fn insert_rows(
        &mut self,
        after: usize,
        count: usize,
        max_rows: Option<usize>,
    ) -> Result<(), StructureError> {
        if after >= self.num_rows() {
            return Err(StructureError::OutOfBounds {
                axis: Axis::Rows,
                index: after,
                len: self.num_rows(),
            });
        }
        let requested = self.num_rows() + count;
        if let Some(limit) = max_rows {
            if requested > limit {
                return Err(StructureError::CapacityExceeded {
                    axis: Axis::Rows,
                    limit,
                    requested,
                });
            }
        }

        let at = after + 1;
        let width = self.num_columns();
        self.rows
            .splice(at..at, (0..count).map(|_| vec![Cell::empty(); width]));
        if let Some(headers) = &mut self.row_headers {
            headers.splice(at..at, (0..count).map(|_| RowHeader::default()));
        }
        Ok(())
    }

    /// Insert `count` empty columns immediately after column `after`
    pub fn insert_columns(
        &mut self,
        after: usize,
        count: usize,
        max_columns: Option<usize>,
    ) -> Result<(), StructureError> {
        if after >= self.num_columns() {
            return Err(StructureError::OutOfBounds {
                axis: Axis::Columns,
                index: after,
                len: self.num_columns(),
            });
        }
        let requested = self.num_columns() + count;
        if let Some(limit) = max_columns {
            if requested > limit {
                return Err(StructureError::CapacityExceeded {
                    axis: Axis::Columns,
                    limit,
                    requested,
                });
            }
        }

        let at = after + 1;
        for row in &mut self.rows {
            row.splice(at..at, (0..count).map(|_| Cell::empty()));
        }
        if let Some(headers) = &mut self.column_headers {
            headers.splice(at..at, (0..count).map(|_| ColumnHeader::default()));
        }
        Ok(())
    }

    /// Delete the rows in `range`, keeping at least `max(min_rows, 1)` rows
    pub fn delete_rows(
        &mut self,
        range: RangeInclusive<usize>,
        min_rows: usize,
    ) -> Result<(), StructureError> {
        let (start, end) = (*range.start(), *range.end());
        if start > end || end >= self.num_rows() {
            return Err(StructureError::OutOfBounds {
                axis: Axis::Rows,
                index: end,
                len: self.num_rows(),
            });
        }
        let minimum = min_rows.max(1);
        let remaining = self.num_rows() - (end - start + 1);
        if remaining < minimum {
            return Err(StructureError::MinimumSizeViolation {
                axis: Axis::Rows,
                minimum,
                remaining,
            });
        }

        self.rows.drain(start..=end);
        if let Some(headers) = &mut self.row_headers {
            headers.drain(start..=end);
        }
        Ok(())
    }

    /// Delete the columns in `range`, keeping at least one column
    pub fn delete_columns(&mut self, range: RangeInclusive<usize>) -> Result<(), StructureError> {
        let (start, end) = (*range.start(), *range.end());
        if start > end || end >= self.num_columns() {
            return Err(StructureError::OutOfBounds {
                axis: Axis::Columns,
                index: end,
                len: self.num_columns(),
            });
        }
        let remaining = self.num_columns() - (end - start + 1);
        if remaining < 1 {
            return Err(StructureError::MinimumSizeViolation {
                axis: Axis::Columns,
                minimum: 1,
                remaining,
            });
        }

        for row in &mut self.rows {
            row.drain(start..=end);
        }
        if let Some(headers) = &mut self.column_headers {
            headers.drain(start..=end);
        }
        Ok(())
    }

    pub fn column_width(&self, col: usize) -> u32 {
        self.column_headers
            .as_ref()
            .and_then(|h| h.get(col))
            .map(ColumnHeader::effective_width)
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    pub fn row_height(&self, row: usize) -> u32 {
        self.row_headers
            .as_ref()
            .and_then(|h| h.get(row))
            .map(RowHeader::effective_height)
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Resize a column whose header allows it. Returns the clamped width applied.
    pub fn resize_column(&mut self, col: usize, width: u32) -> Option<u32> {
        let header = self.column_headers.as_mut()?.get_mut(col)?;
        if !header.can_resize {
            return None;
        }
        let width = header.clamp_width(width);
        header.width = Some(width);
        Some(width)
    }

    /// Resize a row whose header allows it. Returns the clamped height applied.
    pub fn resize_row(&mut self, row: usize, height: u32) -> Option<u32> {
        let header = self.row_headers.as_mut()?.get_mut(row)?;
        if !header.can_resize {
            return None;
        }
        let height = header.clamp_height(height);
        header.height = Some(height);
        Some(height)
    }

    /// Adopt `live`'s header sizes on every axis whose length is unchanged.
    /// Snapshots restored from history must not roll back resizes.
    pub fn keep_sizes_from(&mut self, live: &Grid) {
        if let (Some(ours), Some(theirs)) = (&mut self.column_headers, &live.column_headers) {
            if ours.len() == theirs.len() {
                for (header, current) in ours.iter_mut().zip(theirs) {
                    header.width = current.width;
                }
            }
        }
        if let (Some(ours), Some(theirs)) = (&mut self.row_headers, &live.row_headers) {
            if ours.len() == theirs.len() {
                for (header, current) in ours.iter_mut().zip(theirs) {
                    header.height = current.height;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(grid: &Grid) -> Vec<Vec<String>> {
        grid.rows()
            .iter()
            .map(|r| r.iter().map(|c| c.value.clone()).collect())
            .collect()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Grid::from_values(&[vec!["a", "b"], vec!["c"]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        let empty: Vec<Vec<&str>> = vec![];
        assert_eq!(Grid::from_values(&empty).unwrap_err(), GridError::Empty);
        assert_eq!(
            Grid::from_values(&[Vec::<&str>::new()]).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn test_new_rejects_header_length_mismatch() {
        let rows = vec![vec![Cell::empty(); 2]];
        let err = Grid::new(rows, Some(vec![ColumnHeader::named("A")]), None).unwrap_err();
        assert!(matches!(
            err,
            GridError::HeaderLengthMismatch {
                axis: Axis::Columns,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_insert_rows_after_index() {
        let mut grid = Grid::from_values(&[vec!["a"], vec!["b"], vec!["c"]]).unwrap();
        grid.insert_rows(0, 2, None).unwrap();
        assert_eq!(
            values(&grid),
            vec![vec!["a"], vec![""], vec![""], vec!["b"], vec!["c"]]
        );
    }

    #[test]
    fn test_insert_rows_respects_capacity() {
        let mut grid = Grid::blank(4, 3);
        let err = grid.insert_rows(1, 1, Some(4)).unwrap_err();
        assert!(matches!(err, StructureError::CapacityExceeded { limit: 4, .. }));
        assert_eq!(grid.num_rows(), 4);
    }

    #[test]
    fn test_insert_columns_keeps_headers_in_step() {
        let rows = vec![vec![Cell::with_value("a"), Cell::with_value("b")]];
        let headers = vec![ColumnHeader::named("A"), ColumnHeader::named("B")];
        let mut grid = Grid::new(rows, Some(headers), None).unwrap();

        grid.insert_columns(0, 1, Some(3)).unwrap();
        assert_eq!(values(&grid), vec![vec!["a", "", "b"]]);
        let names: Vec<_> = grid
            .column_headers()
            .unwrap()
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "", "B"]);
    }

    #[test]
    fn test_delete_columns_keeps_one() {
        let mut grid = Grid::blank(3, 3);
        let err = grid.delete_columns(0..=2).unwrap_err();
        assert!(matches!(
            err,
            StructureError::MinimumSizeViolation { remaining: 0, .. }
        ));
        assert_eq!(grid.num_columns(), 3);

        grid.delete_columns(1..=2).unwrap();
        assert_eq!(grid.num_columns(), 1);
    }

    #[test]
    fn test_delete_rows_respects_min_rows() {
        let mut grid = Grid::blank(4, 1);
        assert!(grid.delete_rows(0..=1, 3).is_err());
        grid.delete_rows(0..=0, 3).unwrap();
        assert_eq!(grid.num_rows(), 3);
    }

    #[test]
    fn test_delete_rows_keeps_untouched_styling() {
        let rows = vec![
            vec![Cell::with_value("a").locked()],
            vec![Cell::with_value("b")],
            vec![Cell::with_value("c").locked()],
        ];
        let mut grid = Grid::new(rows, None, None).unwrap();
        grid.delete_rows(1..=1, 0).unwrap();
        assert!(!grid.cell(0, 0).unwrap().is_editable());
        assert!(!grid.cell(1, 0).unwrap().is_editable());
        assert_eq!(grid.value(1, 0), "c");
    }

    #[test]
    fn test_fill_skips_locked_cells() {
        let rows = vec![vec![
            Cell::empty(),
            Cell::empty().locked(),
            Cell::empty(),
        ]];
        let mut grid = Grid::new(rows, None, None).unwrap();
        let changed = grid.fill(Bounds::new(0, 0, 0, 2), "X", true);
        assert_eq!(changed, 2);
        assert_eq!(values(&grid), vec![vec!["X", "", "X"]]);
    }

    #[test]
    fn test_table_wide_flag_locks_everything() {
        let mut grid = Grid::blank(2, 2);
        assert_eq!(grid.fill(grid.full_bounds(), "X", false), 0);
        assert!(!grid.is_cell_editable(0, 0, false));
    }

    #[test]
    fn test_paste_values_clips_to_grid() {
        let mut grid = Grid::blank(2, 2);
        let source = vec![
            vec![Cell::with_value("a"), Cell::with_value("b")],
            vec![Cell::with_value("c"), Cell::with_value("d")],
        ];
        let changed = grid.paste_values(Coord::new(1, 1), &source, true);
        assert_eq!(changed, 1);
        assert_eq!(grid.value(1, 1), "a");
    }

    #[test]
    fn test_resize_requires_can_resize() {
        let headers = vec![
            ColumnHeader {
                can_resize: true,
                ..ColumnHeader::named("A")
            },
            ColumnHeader::named("B"),
        ];
        let mut grid = Grid::new(vec![vec![Cell::empty(); 2]], Some(headers), None).unwrap();
        assert_eq!(grid.resize_column(0, 10), Some(30));
        assert_eq!(grid.column_width(0), 30);
        assert_eq!(grid.resize_column(1, 200), None);
        assert_eq!(grid.column_width(1), DEFAULT_COLUMN_WIDTH);
        assert_eq!(grid.row_height(0), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_keep_sizes_only_when_lengths_match() {
        let resizable = || ColumnHeader {
            can_resize: true,
            ..ColumnHeader::default()
        };
        let mut live = Grid::new(
            vec![vec![Cell::empty(); 2]],
            Some(vec![resizable(), resizable()]),
            None,
        )
        .unwrap();
        let mut snapshot = live.clone();
        live.resize_column(1, 240);

        snapshot.keep_sizes_from(&live);
        assert_eq!(snapshot.column_width(1), 240);

        let mut narrower =
            Grid::new(vec![vec![Cell::empty()]], Some(vec![resizable()]), None).unwrap();
        narrower.keep_sizes_from(&live);
        assert_eq!(narrower.column_width(0), DEFAULT_COLUMN_WIDTH);
    }
}
