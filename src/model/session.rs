//! Edit-session state machine data
//!
//! The engine is in exactly one of three sessions: browsing the grid, editing
//! a single cell's draft, or dragging the fill handle.

use super::selection::{Bounds, Coord};

/// Single-line text buffer with a caret (character index)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    cursor: usize,
}

impl Draft {
    /// Draft holding `text` with the caret at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// State for editing a single cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEditState {
    /// Cell being edited
    pub position: Coord,
    pub draft: Draft,
    /// Value before editing started
    pub original: String,
}

impl CellEditState {
    /// Edit seeded with the cell's current value
    pub fn new(position: Coord, value: String) -> Self {
        Self {
            position,
            draft: Draft::new(value.clone()),
            original: value,
        }
    }

    /// Edit whose draft replaces the value with a typed character
    pub fn with_char(position: Coord, original: String, ch: char) -> Self {
        Self {
            position,
            draft: Draft::new(ch.to_string()),
            original,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.draft.text() != self.original
    }
}

/// An in-progress fill-handle drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillDrag {
    /// Source cell whose value is copied (the selection anchor)
    pub origin: Coord,
    /// Cell currently under the pointer
    pub target: Coord,
}

impl FillDrag {
    pub fn new(origin: Coord) -> Self {
        Self {
            origin,
            target: origin,
        }
    }

    /// Rectangle that release would fill
    pub fn bounds(&self) -> Bounds {
        Bounds::spanning(self.origin, self.target)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Browsing,
    Editing(CellEditState),
    FillDragging(FillDrag),
}

impl EditSession {
    pub fn is_browsing(&self) -> bool {
        matches!(self, EditSession::Browsing)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn is_fill_dragging(&self) -> bool {
        matches!(self, EditSession::FillDragging(_))
    }

    pub fn editing(&self) -> Option<&CellEditState> {
        match self {
            EditSession::Editing(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn editing_mut(&mut self) -> Option<&mut CellEditState> {
        match self {
            EditSession::Editing(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn fill_drag(&self) -> Option<&FillDrag> {
        match self {
            EditSession::FillDragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EditSession::Browsing => "browsing",
            EditSession::Editing(_) => "editing",
            EditSession::FillDragging(_) => "fill_dragging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_editing_multibyte() {
        let mut draft = Draft::new("héllo");
        assert_eq!(draft.cursor(), 5);
        draft.move_home();
        draft.move_right();
        draft.delete_forward();
        assert_eq!(draft.text(), "hllo");
        draft.insert_char('é');
        assert_eq!(draft.text(), "héllo");
        draft.move_end();
        draft.delete_backward();
        assert_eq!(draft.text(), "héll");
    }

    #[test]
    fn test_draft_bounds_are_safe() {
        let mut draft = Draft::new("");
        draft.delete_backward();
        draft.delete_forward();
        draft.move_left();
        draft.move_right();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn test_with_char_replaces_value() {
        let edit = CellEditState::with_char(Coord::new(1, 1), "5".into(), '9');
        assert_eq!(edit.draft.text(), "9");
        assert!(edit.is_modified());
        assert!(!CellEditState::new(Coord::new(0, 0), "5".into()).is_modified());
    }

    #[test]
    fn test_fill_drag_bounds_follow_target() {
        let mut drag = FillDrag::new(Coord::new(2, 2));
        drag.target = Coord::new(0, 3);
        assert_eq!(drag.bounds(), Bounds::new(0, 2, 2, 3));
    }
}
