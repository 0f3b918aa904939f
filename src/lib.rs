//! celltable - Elm-style spreadsheet grid editing engine
//!
//! This crate provides the state, update logic and host interface for an
//! interactive table: cell selection, in-place editing, fill drag, structural
//! row/column edits, clipboard interchange and multi-level undo/redo.
//!
//! Hosts usually embed a [`Table`] and implement [`TableHost`]; tests and
//! tools can drive [`update::update`] on a [`TableModel`] directly.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod host;
pub mod keymap;
pub mod menu;
pub mod messages;
pub mod model;
pub mod script;
pub mod table;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{EngineConfig, TableConfig, TableInit};
pub use host::{NullHost, TableHost};
pub use messages::Msg;
pub use model::TableModel;
pub use table::Table;
