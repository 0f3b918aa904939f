//! Grid snapshot history (undo/redo)
//!
//! Commands push the grid as it was *before* they mutated it. Undo hands the
//! live grid over to the redo stack in exchange for the previous snapshot, so
//! the first mutation is undoable and redo returns to the post-mutation state.

use super::grid::Grid;

/// Default bound on undo entries
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Grid>,
    redo_stack: Vec<Grid>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// History bounded to `max_entries` undo steps (at least one)
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Record the pre-mutation grid (clears redo)
    pub fn push(&mut self, snapshot: Grid) {
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);

        if self.undo_stack.len() > self.max_entries {
            let excess = self.undo_stack.len() - self.max_entries;
            self.undo_stack.drain(..excess);
        }
    }

    /// Step back: returns the earlier grid, keeping `current` for redo
    pub fn undo(&mut self, current: Grid) -> Option<Grid> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: returns the later grid, keeping `current` for undo
    pub fn redo(&mut self, current: Grid) -> Option<Grid> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
