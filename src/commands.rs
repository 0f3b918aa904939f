//! Command types for the Elm-style architecture
//!
//! Commands are the side effects of an update: notifications the host facade
//! turns into `TableHost` callbacks.

use crate::model::{Bounds, Cell, ColumnHeader, Coord, RowHeader, Selection};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// View-only change (draft text, fill preview, drag state)
    Redraw,
    /// Committed content change; carries the full new cell matrix
    CellsChanged(Vec<Vec<Cell>>),
    ColumnHeadersChanged(Vec<ColumnHeader>),
    RowHeadersChanged(Vec<RowHeader>),
    SelectionChanged(Option<Selection>),
    RowsAdded { after: usize, count: usize },
    ColumnsAdded { after: usize, count: usize },
    RowsDeleted { start: usize, count: usize },
    ColumnsDeleted { start: usize, count: usize },
    /// Final width once a column resize gesture ends
    ColumnResized { index: usize, width: u32 },
    RowResized { index: usize, height: u32 },
    Copied { text: String, bounds: Bounds },
    Cut { text: String, bounds: Bounds },
    Pasted { anchor: Coord, rows: usize, cols: usize },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Clipboard writes don't change anything visible
            Cmd::Copied { .. } => false,
            _ => true,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }

    /// Whether this command (or any batched one) commits new cell content
    pub fn changes_cells(&self) -> bool {
        match self {
            Cmd::CellsChanged(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::changes_cells),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collapses() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw);
        assert!(matches!(
            Cmd::batch(vec![Cmd::Redraw, Cmd::SelectionChanged(None)]),
            Cmd::Batch(v) if v.len() == 2
        ));
    }

    #[test]
    fn test_into_vec_flattens() {
        let cmd = Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::SelectionChanged(None), Cmd::None]),
        ]);
        assert_eq!(
            cmd.into_vec(),
            vec![Cmd::Redraw, Cmd::SelectionChanged(None)]
        );
    }

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::CellsChanged(vec![]).needs_redraw());
        assert!(!Cmd::Copied {
            text: String::new(),
            bounds: Bounds::new(0, 0, 0, 0)
        }
        .needs_redraw());
    }
}
