//! Default keybindings for the table
//!
//! The embedded keymap.yaml is the source of truth; `default_bindings` is the
//! hardcoded fallback used if it ever fails to parse.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap, for users who want a starting point
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at `~/.config/celltable/keymap.yaml`
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user keymap from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - Same keystroke and conditions: the user binding replaces the base one
/// - `Unbound`: every base binding on that keystroke is removed
/// - Otherwise the user binding is appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        let existing_idx = result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke && b.when == user_binding.when);

        match existing_idx {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Generate default keybindings for the current platform
///
/// Uses Cmd on macOS, Ctrl on Windows/Linux for the "command" modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let shift = Modifiers::SHIFT;
    let none = Modifiers::NONE;

    let browsing = |key, mods, command| bind(key, mods, command).when_single(Condition::Browsing);
    let editing = |key, mods, command| bind(key, mods, command).when_single(Condition::Editing);

    vec![
        // ====================================================================
        // Selection
        // ====================================================================
        browsing(KeyCode::Up, none, Command::MoveUp),
        browsing(KeyCode::Down, none, Command::MoveDown),
        browsing(KeyCode::Left, none, Command::MoveLeft),
        browsing(KeyCode::Right, none, Command::MoveRight),
        browsing(KeyCode::Up, shift, Command::ExtendUp),
        browsing(KeyCode::Down, shift, Command::ExtendDown),
        browsing(KeyCode::Left, shift, Command::ExtendLeft),
        browsing(KeyCode::Right, shift, Command::ExtendRight),
        bind(KeyCode::Tab, none, Command::NextCell),
        bind(KeyCode::Tab, shift, Command::PrevCell),

        // ====================================================================
        // Cell editing
        // ====================================================================
        browsing(KeyCode::Enter, none, Command::StartEditing),
        editing(KeyCode::Enter, none, Command::ConfirmEdit),
        editing(KeyCode::Escape, none, Command::CancelEdit),
        editing(KeyCode::Enter, cmd, Command::FillSelection),
        browsing(KeyCode::Delete, none, Command::ClearCells),
        browsing(KeyCode::Backspace, none, Command::ClearCells),
        editing(KeyCode::Backspace, none, Command::DraftDeleteBackward),
        editing(KeyCode::Delete, none, Command::DraftDeleteForward),
        editing(KeyCode::Left, none, Command::DraftCursorLeft),
        editing(KeyCode::Right, none, Command::DraftCursorRight),
        editing(KeyCode::Home, none, Command::DraftCursorHome),
        editing(KeyCode::End, none, Command::DraftCursorEnd),

        // ====================================================================
        // Clipboard / history
        // ====================================================================
        bind(KeyCode::Char('c'), cmd, Command::Copy),
        bind(KeyCode::Char('x'), cmd, Command::Cut),
        bind(KeyCode::Char('v'), cmd, Command::Paste),
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('z'), cmd_shift, Command::Redo),
        bind(KeyCode::Char('y'), cmd, Command::Redo),
    ]
}

/// Helper to create a keybinding
fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd_z() -> Keystroke {
        Keystroke::new(KeyCode::Char('z'), Modifiers::cmd())
    }

    #[test]
    fn test_default_bindings_cover_clipboard_and_history() {
        let bindings = default_bindings();
        for command in [Command::Copy, Command::Cut, Command::Paste, Command::Undo, Command::Redo] {
            assert!(
                bindings.iter().any(|b| b.command == command),
                "missing {:?}",
                command
            );
        }
    }

    #[test]
    fn test_merge_replaces_same_keystroke() {
        let base = vec![Keybinding::new(cmd_z(), Command::Undo)];
        let user = vec![Keybinding::new(cmd_z(), Command::Redo)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].command, Command::Redo);
    }

    #[test]
    fn test_merge_keeps_bindings_with_other_conditions() {
        let enter = Keystroke::key(KeyCode::Enter);
        let base = vec![
            Keybinding::new(enter, Command::StartEditing).when_single(Condition::Browsing),
        ];
        let user =
            vec![Keybinding::new(enter, Command::NextCell).when_single(Condition::Editing)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_unbound_removes_all_on_keystroke() {
        let enter = Keystroke::key(KeyCode::Enter);
        let base = vec![
            Keybinding::new(enter, Command::StartEditing).when_single(Condition::Browsing),
            Keybinding::new(enter, Command::ConfirmEdit).when_single(Condition::Editing),
            Keybinding::new(cmd_z(), Command::Undo),
        ];
        let user = vec![Keybinding::new(enter, Command::Unbound)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].command, Command::Undo);
    }
}
