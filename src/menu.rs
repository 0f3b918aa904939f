//! Context menu model
//!
//! The host renders the menu; the engine decides which items exist, how they
//! are labelled for the current selection span, and whether they are enabled.

use crate::messages::{ClipboardMsg, Msg, StructureMsg};
use crate::model::TableModel;

/// Actions offered by the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Copy,
    Cut,
    Paste,
    AddColumns,
    AddRows,
    DeleteColumns,
    DeleteRows,
}

impl MenuCommand {
    pub fn to_msg(self) -> Msg {
        match self {
            MenuCommand::Copy => Msg::Clipboard(ClipboardMsg::Copy),
            MenuCommand::Cut => Msg::Clipboard(ClipboardMsg::Cut),
            MenuCommand::Paste => Msg::Clipboard(ClipboardMsg::Paste),
            MenuCommand::AddColumns => Msg::Structure(StructureMsg::AddColumns),
            MenuCommand::AddRows => Msg::Structure(StructureMsg::AddRows),
            MenuCommand::DeleteColumns => Msg::Structure(StructureMsg::DeleteColumns),
            MenuCommand::DeleteRows => Msg::Structure(StructureMsg::DeleteRows),
        }
    }

    /// Parse a kebab-case name (`add-rows`) as used by scripts
    pub fn from_name(name: &str) -> Option<Self> {
        MENU_COMMANDS
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.command)
    }
}

struct MenuCommandDef {
    command: MenuCommand,
    name: &'static str,
    /// Label when the selection spans one row/column
    singular: &'static str,
    /// Label prefix when it spans several; the count is appended
    plural: &'static str,
}

/// Static registry of menu entries, in display order
static MENU_COMMANDS: &[MenuCommandDef] = &[
    MenuCommandDef {
        command: MenuCommand::Copy,
        name: "copy",
        singular: "Copy",
        plural: "Copy",
    },
    MenuCommandDef {
        command: MenuCommand::Cut,
        name: "cut",
        singular: "Cut",
        plural: "Cut",
    },
    MenuCommandDef {
        command: MenuCommand::Paste,
        name: "paste",
        singular: "Paste",
        plural: "Paste",
    },
    MenuCommandDef {
        command: MenuCommand::AddColumns,
        name: "add-columns",
        singular: "Add Column",
        plural: "Add Columns",
    },
    MenuCommandDef {
        command: MenuCommand::AddRows,
        name: "add-rows",
        singular: "Add Row",
        plural: "Add Rows",
    },
    MenuCommandDef {
        command: MenuCommand::DeleteColumns,
        name: "delete-columns",
        singular: "Delete Column",
        plural: "Delete Columns",
    },
    MenuCommandDef {
        command: MenuCommand::DeleteRows,
        name: "delete-rows",
        singular: "Delete Row",
        plural: "Delete Rows",
    },
];

/// One rendered context menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub command: MenuCommand,
    pub label: String,
    pub enabled: bool,
}

/// Build the context menu for the current model state
pub fn context_menu(model: &TableModel) -> Vec<MenuItem> {
    let bounds = model.selection_bounds();
    let (row_span, col_span) = bounds.map_or((1, 1), |b| (b.row_count(), b.col_count()));
    let has_selection = bounds.is_some();
    let config = &model.config;
    let rows = model.grid.num_rows();
    let cols = model.grid.num_columns();
    let dragging = model.session.is_fill_dragging();

    MENU_COMMANDS
        .iter()
        .map(|def| {
            let span = match def.command {
                MenuCommand::AddRows | MenuCommand::DeleteRows => row_span,
                MenuCommand::AddColumns | MenuCommand::DeleteColumns => col_span,
                _ => 1,
            };
            let label = if span > 1 {
                format!("{} ({})", def.plural, span)
            } else {
                def.singular.to_string()
            };

            let enabled = !dragging
                && match def.command {
                    MenuCommand::Copy | MenuCommand::Paste => has_selection,
                    MenuCommand::Cut => model.selection_has_editable(),
                    MenuCommand::AddRows => {
                        has_selection
                            && config.can_add_rows
                            && config.max_rows.map_or(true, |max| rows + row_span <= max)
                    }
                    MenuCommand::AddColumns => {
                        has_selection
                            && config.can_add_columns
                            && config.max_columns.map_or(true, |max| cols + col_span <= max)
                    }
                    MenuCommand::DeleteRows => {
                        has_selection
                            && config.can_delete_rows
                            && rows.saturating_sub(row_span) >= config.row_floor()
                    }
                    MenuCommand::DeleteColumns => {
                        has_selection
                            && config.can_delete_columns
                            && cols.saturating_sub(col_span) >= 1
                    }
                };

            MenuItem {
                command: def.command,
                label,
                enabled,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardBridge;
    use crate::config::{TableConfig, TableInit};
    use crate::model::{Coord, Selection};

    fn model(rows: usize, cols: usize, config: TableConfig) -> TableModel {
        let values = vec![vec!["x"; cols]; rows];
        let init = TableInit::from_values(&values).with_config(config);
        TableModel::new(init, ClipboardBridge::disconnected(), 10).unwrap()
    }

    fn item(items: &[MenuItem], command: MenuCommand) -> &MenuItem {
        items.iter().find(|i| i.command == command).unwrap()
    }

    #[test]
    fn test_everything_disabled_without_selection() {
        let m = model(3, 3, TableConfig::permissive());
        let items = context_menu(&m);
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| !i.enabled));
    }

    #[test]
    fn test_labels_reflect_span() {
        let mut m = model(5, 5, TableConfig::permissive());
        m.selection = Some(Selection::spanning(Coord::new(0, 0), Coord::new(2, 0)));
        let items = context_menu(&m);

        assert_eq!(item(&items, MenuCommand::AddRows).label, "Add Rows (3)");
        assert_eq!(item(&items, MenuCommand::AddColumns).label, "Add Column");
        assert_eq!(item(&items, MenuCommand::DeleteRows).label, "Delete Rows (3)");
    }

    #[test]
    fn test_add_row_disabled_at_capacity() {
        let config = TableConfig {
            max_rows: Some(4),
            ..TableConfig::permissive()
        };
        let mut m = model(4, 3, config);
        m.selection = Some(Selection::single(Coord::new(2, 0)));
        let items = context_menu(&m);

        assert!(!item(&items, MenuCommand::AddRows).enabled);
        assert!(item(&items, MenuCommand::AddColumns).enabled);
    }

    #[test]
    fn test_delete_all_columns_disabled() {
        let mut m = model(3, 3, TableConfig::permissive());
        m.selection = Some(Selection::spanning(Coord::new(0, 0), Coord::new(0, 2)));
        let items = context_menu(&m);

        assert!(!item(&items, MenuCommand::DeleteColumns).enabled);
        assert!(item(&items, MenuCommand::DeleteRows).enabled);
    }

    #[test]
    fn test_cut_needs_editable_cells() {
        let config = TableConfig {
            cells_editable: false,
            ..TableConfig::permissive()
        };
        let mut m = model(2, 2, config);
        m.selection = Some(Selection::single(Coord::new(0, 0)));
        let items = context_menu(&m);

        assert!(item(&items, MenuCommand::Copy).enabled);
        assert!(!item(&items, MenuCommand::Cut).enabled);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(MenuCommand::from_name("add-rows"), Some(MenuCommand::AddRows));
        assert_eq!(MenuCommand::from_name("paste"), Some(MenuCommand::Paste));
        assert_eq!(MenuCommand::from_name("sort"), None);
    }
}
