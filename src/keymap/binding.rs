//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

/// A single keybinding mapping a keystroke to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must all hold for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    /// Add a single condition to this binding
    pub fn when_single(mut self, condition: Condition) -> Self {
        self.when = Some(vec![condition]);
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.when.is_some()
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_conditional_binding() {
        let enter = Keystroke::key(KeyCode::Enter);
        let plain = Keybinding::new(enter, Command::StartEditing);
        let editing = Keybinding::new(enter, Command::ConfirmEdit).when_single(Condition::Editing);

        assert!(!plain.is_conditional());
        assert!(editing.is_conditional());
        assert_eq!(editing.when, Some(vec![Condition::Editing]));
    }

    #[test]
    fn test_display_string() {
        let binding = Keybinding::new(
            Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL),
            Command::Copy,
        );
        assert!(binding.display_string().contains('C'));
    }
}
