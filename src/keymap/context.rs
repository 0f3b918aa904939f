//! Context system for conditional keybindings
//!
//! The same key means different things while browsing the grid and while
//! editing a cell (Enter starts an edit or confirms it, arrows move the
//! selection or the caret).

use crate::model::TableModel;

/// Context extracted from the table model for keybinding evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// A cell editor is open
    pub editing: bool,
    /// Some cell is selected
    pub has_selection: bool,
}

impl KeyContext {
    pub fn from_model(model: &TableModel) -> Self {
        Self {
            editing: model.session.is_editing(),
            has_selection: model.selection.is_some(),
        }
    }

    /// Browsing with a selected cell
    pub fn browsing() -> Self {
        Self {
            editing: false,
            has_selection: true,
        }
    }

    pub fn editing() -> Self {
        Self {
            editing: true,
            has_selection: true,
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Editing,
    Browsing,
    HasSelection,
    NoSelection,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Editing => ctx.editing,
            Condition::Browsing => !ctx.editing,
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
