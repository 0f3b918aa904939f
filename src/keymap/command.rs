//! Command enum representing all executable table actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to `Msg` values for the Elm-style update loop.

use std::str::FromStr;

use crate::messages::{
    ClipboardMsg, Direction, EditMsg, HistoryMsg, Msg, SelectionMsg, StructureMsg,
};

/// All table commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Selection
    // ========================================================================
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Keep the anchor, move the far corner
    ExtendUp,
    ExtendDown,
    ExtendLeft,
    ExtendRight,
    NextCell,
    PrevCell,
    ClearSelection,

    // ========================================================================
    // Cell editing
    // ========================================================================
    StartEditing,
    ConfirmEdit,
    CancelEdit,
    /// Write the draft into every editable selected cell
    FillSelection,
    /// Clear editable cells in the selection
    ClearCells,
    DraftDeleteBackward,
    DraftDeleteForward,
    DraftCursorLeft,
    DraftCursorRight,
    DraftCursorHome,
    DraftCursorEnd,

    // ========================================================================
    // Clipboard / history
    // ========================================================================
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,

    // ========================================================================
    // Structure
    // ========================================================================
    AddRows,
    AddColumns,
    DeleteRows,
    DeleteColumns,

    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// Convert this command to messages for the update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        let msg = match self {
            MoveUp => Msg::Selection(SelectionMsg::Move(Direction::Up)),
            MoveDown => Msg::Selection(SelectionMsg::Move(Direction::Down)),
            MoveLeft => Msg::Selection(SelectionMsg::Move(Direction::Left)),
            MoveRight => Msg::Selection(SelectionMsg::Move(Direction::Right)),
            ExtendUp => Msg::Selection(SelectionMsg::Extend(Direction::Up)),
            ExtendDown => Msg::Selection(SelectionMsg::Extend(Direction::Down)),
            ExtendLeft => Msg::Selection(SelectionMsg::Extend(Direction::Left)),
            ExtendRight => Msg::Selection(SelectionMsg::Extend(Direction::Right)),
            NextCell => Msg::Selection(SelectionMsg::NextCell),
            PrevCell => Msg::Selection(SelectionMsg::PrevCell),
            ClearSelection => Msg::Selection(SelectionMsg::Clear),

            StartEditing => Msg::Edit(EditMsg::StartEditing),
            ConfirmEdit => Msg::Edit(EditMsg::Confirm),
            CancelEdit => Msg::Edit(EditMsg::Cancel),
            FillSelection => Msg::Edit(EditMsg::FillSelection),
            ClearCells => Msg::Edit(EditMsg::ClearCells),
            DraftDeleteBackward => Msg::Edit(EditMsg::DeleteBackward),
            DraftDeleteForward => Msg::Edit(EditMsg::DeleteForward),
            DraftCursorLeft => Msg::Edit(EditMsg::CursorLeft),
            DraftCursorRight => Msg::Edit(EditMsg::CursorRight),
            DraftCursorHome => Msg::Edit(EditMsg::CursorHome),
            DraftCursorEnd => Msg::Edit(EditMsg::CursorEnd),

            Copy => Msg::Clipboard(ClipboardMsg::Copy),
            Cut => Msg::Clipboard(ClipboardMsg::Cut),
            Paste => Msg::Clipboard(ClipboardMsg::Paste),
            Undo => Msg::History(HistoryMsg::Undo),
            Redo => Msg::History(HistoryMsg::Redo),

            AddRows => Msg::Structure(StructureMsg::AddRows),
            AddColumns => Msg::Structure(StructureMsg::AddColumns),
            DeleteRows => Msg::Structure(StructureMsg::DeleteRows),
            DeleteColumns => Msg::Structure(StructureMsg::DeleteColumns),

            Unbound => return Vec::new(),
        };
        vec![msg]
    }

    /// Get a display name for this command
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            MoveUp => "Move Up",
            MoveDown => "Move Down",
            MoveLeft => "Move Left",
            MoveRight => "Move Right",
            ExtendUp => "Extend Selection Up",
            ExtendDown => "Extend Selection Down",
            ExtendLeft => "Extend Selection Left",
            ExtendRight => "Extend Selection Right",
            NextCell => "Next Cell",
            PrevCell => "Previous Cell",
            ClearSelection => "Clear Selection",
            StartEditing => "Edit Cell",
            ConfirmEdit => "Confirm Edit",
            CancelEdit => "Cancel Edit",
            FillSelection => "Fill Selection",
            ClearCells => "Clear Cells",
            DraftDeleteBackward => "Delete Backward",
            DraftDeleteForward => "Delete Forward",
            DraftCursorLeft => "Caret Left",
            DraftCursorRight => "Caret Right",
            DraftCursorHome => "Caret Home",
            DraftCursorEnd => "Caret End",
            Copy => "Copy",
            Cut => "Cut",
            Paste => "Paste",
            Undo => "Undo",
            Redo => "Redo",
            AddRows => "Add Rows",
            AddColumns => "Add Columns",
            DeleteRows => "Delete Rows",
            DeleteColumns => "Delete Columns",
            Unbound => "Unbound",
        }
    }
}

// Implement FromStr for Command to parse from YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Command::*;

        Ok(match s {
            "MoveUp" => MoveUp,
            "MoveDown" => MoveDown,
            "MoveLeft" => MoveLeft,
            "MoveRight" => MoveRight,
            "ExtendUp" => ExtendUp,
            "ExtendDown" => ExtendDown,
            "ExtendLeft" => ExtendLeft,
            "ExtendRight" => ExtendRight,
            "NextCell" => NextCell,
            "PrevCell" => PrevCell,
            "ClearSelection" => ClearSelection,

            "StartEditing" => StartEditing,
            "ConfirmEdit" => ConfirmEdit,
            "CancelEdit" => CancelEdit,
            "FillSelection" => FillSelection,
            "ClearCells" => ClearCells,
            "DraftDeleteBackward" => DraftDeleteBackward,
            "DraftDeleteForward" => DraftDeleteForward,
            "DraftCursorLeft" => DraftCursorLeft,
            "DraftCursorRight" => DraftCursorRight,
            "DraftCursorHome" => DraftCursorHome,
            "DraftCursorEnd" => DraftCursorEnd,

            "Copy" => Copy,
            "Cut" => Cut,
            "Paste" => Paste,
            "Undo" => Undo,
            "Redo" => Redo,

            "AddRows" => AddRows,
            "AddColumns" => AddColumns,
            "DeleteRows" => DeleteRows,
            "DeleteColumns" => DeleteColumns,

            "Unbound" => Unbound,
            _ => return Err(()),
        })
    }
}
