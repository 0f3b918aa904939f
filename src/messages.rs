//! Message types for the Elm-style architecture
//!
//! Every user intent reaches the engine as a [`Msg`]. Native input (keys,
//! pointer, context menu) is translated into these before `update` runs.

use crate::model::Coord;

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, column) delta of one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Keyboard selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMsg {
    /// Collapse to one cell and move it (Arrow)
    Move(Direction),
    /// Keep the anchor, move the far corner (Shift+Arrow)
    Extend(Direction),
    /// Tab
    NextCell,
    /// Shift+Tab
    PrevCell,
    /// Select a cell programmatically
    SelectCell(Coord),
    /// Drop the selection entirely
    Clear,
}

/// Cell editing (Browsing ⇄ Editing transitions and draft manipulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMsg {
    /// Enter Editing on the anchor, seeded with its value (Enter)
    StartEditing,
    /// Printable character: starts an edit in Browsing, inserts in Editing
    InsertChar(char),
    /// Commit the draft and move down (Enter while editing)
    Confirm,
    /// Discard the draft (Escape)
    Cancel,
    /// Write the draft into every editable selected cell (Ctrl+Enter)
    FillSelection,
    /// Clear editable cells in the selection (Delete/Backspace while browsing)
    ClearCells,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMsg {
    Copy,
    Cut,
    Paste,
}

/// Structural mutations sized by the selection span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureMsg {
    AddRows,
    AddColumns,
    DeleteRows,
    DeleteColumns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMsg {
    Undo,
    Redo,
}

/// Pointer events already hit-tested to cells by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Press on a cell; `extend` when Shift is held
    Down { coord: Coord, extend: bool },
    /// Pointer entered another cell while pressed
    Move(Coord),
    /// Release inside the grid
    Up,
    /// Release outside the grid
    Cancel,
    DoubleClick(Coord),
    /// Press on the selection's fill handle
    FillHandleDown,
}

/// Header interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMsg {
    ResizeColumn { index: usize, width: u32 },
    ResizeRow { index: usize, height: u32 },
    FinishColumnResize { index: usize },
    FinishRowResize { index: usize },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Selection(SelectionMsg),
    Edit(EditMsg),
    Clipboard(ClipboardMsg),
    Structure(StructureMsg),
    History(HistoryMsg),
    Pointer(PointerMsg),
    Header(HeaderMsg),
    /// The table lost input focus
    FocusLost,
}
