//! Host facade
//!
//! [`Table`] owns one engine instance, turns native input (keystrokes,
//! context-menu picks, hit-tested pointer events) into messages, runs them
//! through `update`, and delivers the resulting commands to a [`TableHost`].

use crate::clipboard::ClipboardBridge;
use crate::commands::Cmd;
use crate::config::{EngineConfig, TableInit};
use crate::host::TableHost;
use crate::keymap::{default_bindings, load_default_keymap, KeyCode, KeyContext, Keymap, Keystroke};
use crate::menu::{context_menu, MenuCommand, MenuItem};
use crate::messages::{EditMsg, Msg};
use crate::model::{GridError, TableModel, DEFAULT_HISTORY_LIMIT};
use crate::update::update;

/// One interactive table bound to its host
pub struct Table<H: TableHost> {
    model: TableModel,
    keymap: Keymap,
    host: H,
}

impl<H: TableHost> Table<H> {
    /// Build a table with the default keymap (embedded defaults plus the
    /// user's keymap.yaml)
    pub fn new(init: TableInit, clipboard: ClipboardBridge, host: H) -> Result<Self, GridError> {
        let model = TableModel::new(init, clipboard, DEFAULT_HISTORY_LIMIT)?;
        Ok(Self {
            model,
            keymap: Keymap::with_bindings(load_default_keymap()),
            host,
        })
    }

    /// Build a table honoring user preferences
    pub fn with_engine_config(
        init: TableInit,
        engine: &EngineConfig,
        host: H,
    ) -> Result<Self, GridError> {
        let clipboard = if engine.system_clipboard {
            ClipboardBridge::system()
        } else {
            ClipboardBridge::disconnected()
        };
        let model = TableModel::new(init, clipboard, engine.history_limit)?;
        Ok(Self {
            model,
            keymap: Keymap::with_bindings(load_default_keymap()),
            host,
        })
    }

    /// Replace the keymap
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Use the built-in bindings only, ignoring user overrides
    pub fn with_builtin_keymap(self) -> Self {
        self.with_keymap(Keymap::with_bindings(default_bindings()))
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Run one message through the engine and notify the host.
    ///
    /// Returns whether anything happened.
    pub fn send(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                self.dispatch(cmd);
                true
            }
            None => false,
        }
    }

    /// Handle a key press.
    ///
    /// `text` is the character the key would type, if any. Bound keystrokes
    /// run their command; otherwise printable text goes to the cell editor.
    pub fn key_down(&mut self, keystroke: Keystroke, text: Option<char>) -> bool {
        let context = KeyContext::from_model(&self.model);
        if let Some(command) = self.keymap.lookup_with_context(&keystroke, Some(&context)) {
            tracing::debug!(key = %keystroke, command = command.display_name(), "key bound");
            let mut handled = false;
            for msg in command.to_msgs() {
                handled |= self.send(msg);
            }
            return handled;
        }

        let text = text.or(match keystroke.key {
            KeyCode::Space => Some(' '),
            _ => None,
        });
        match text {
            Some(ch) if keystroke.mods.allows_text() && !ch.is_control() => {
                self.send(Msg::Edit(EditMsg::InsertChar(ch)))
            }
            _ => false,
        }
    }

    /// Type a string as a sequence of unmodified key presses
    pub fn type_text(&mut self, text: &str) -> bool {
        let mut handled = false;
        for ch in text.chars() {
            let keystroke = if ch == ' ' {
                Keystroke::key(KeyCode::Space)
            } else {
                Keystroke::char(ch)
            };
            handled |= self.key_down(keystroke, Some(ch));
        }
        handled
    }

    /// Items for a context menu opened now
    pub fn context_menu(&self) -> Vec<MenuItem> {
        context_menu(&self.model)
    }

    /// Run a context-menu pick
    pub fn menu(&mut self, command: MenuCommand) -> bool {
        self.send(command.to_msg())
    }

    /// Replace the grid from new host data. Clears history, selection and
    /// any in-progress edit.
    pub fn reload(&mut self, init: TableInit) -> Result<(), GridError> {
        let had_selection = self.model.selection.is_some();
        self.model.reinitialize(init)?;
        tracing::info!(
            rows = self.model.grid.num_rows(),
            cols = self.model.grid.num_columns(),
            "table reloaded"
        );
        if had_selection {
            self.host.on_selection_change(None);
        }
        Ok(())
    }

    fn dispatch(&mut self, cmd: Cmd) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::None => {}
                Cmd::Redraw => self.host.request_redraw(),
                Cmd::CellsChanged(cells) => self.host.on_cells_change(&cells),
                Cmd::ColumnHeadersChanged(headers) => self.host.on_column_headers_change(&headers),
                Cmd::RowHeadersChanged(headers) => self.host.on_row_headers_change(&headers),
                Cmd::SelectionChanged(selection) => self.host.on_selection_change(selection),
                Cmd::RowsAdded { after, count } => self.host.on_rows_added(after, count),
                Cmd::ColumnsAdded { after, count } => self.host.on_columns_added(after, count),
                Cmd::RowsDeleted { start, count } => self.host.on_rows_deleted(start, count),
                Cmd::ColumnsDeleted { start, count } => self.host.on_columns_deleted(start, count),
                Cmd::ColumnResized { index, width } => self.host.on_column_resized(index, width),
                Cmd::RowResized { index, height } => self.host.on_row_resized(index, height),
                Cmd::Copied { text, bounds } => self.host.on_copy(&text, bounds),
                Cmd::Cut { text, bounds } => self.host.on_cut(&text, bounds),
                Cmd::Pasted { anchor, rows, cols } => self.host.on_paste(anchor, rows, cols),
                // into_vec flattens batches
                Cmd::Batch(_) => {}
            }
        }
    }
}

impl<H: TableHost + std::fmt::Debug> std::fmt::Debug for Table<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("model", &self.model)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
