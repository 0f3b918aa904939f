//! Line-based interaction scripts
//!
//! Scripts drive a [`Table`] the way a host would, one event per line.
//! Blank lines and lines starting with `#` are ignored. Coordinates are
//! zero-based.
//!
//! ```text
//! down R C          press on cell (R, C)
//! shift-down R C    press with Shift held (extend from the anchor)
//! move R C          pointer entered cell (R, C) while pressed
//! up                release inside the grid
//! cancel            release outside the grid
//! dblclick R C      double-click cell (R, C)
//! fill-handle       press on the selection's fill handle
//! key KEYS          keystroke, e.g. `key enter`, `key cmd+z`, `key shift+tab`
//! type TEXT         type the rest of the line
//! menu NAME         context-menu pick: copy, cut, paste, add-rows, ...
//! resize-col I W    drag column I to width W
//! resize-row I H    drag row I to height H
//! finish-col I      end a column resize gesture
//! finish-row I      end a row resize gesture
//! blur              the table lost focus
//! ```

use std::fmt;
use std::str::FromStr;

use crate::host::TableHost;
use crate::keymap::{parse_key_string, Keystroke};
use crate::menu::MenuCommand;
use crate::messages::{HeaderMsg, Msg, PointerMsg};
use crate::model::Coord;
use crate::table::Table;

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Send(Msg),
    Key(Keystroke),
    Type(String),
    Menu(MenuCommand),
}

/// A script line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Parse a whole script
pub fn parse_script(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = parse_step(line).map_err(|message| ScriptError {
            line: idx + 1,
            message,
        })?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_step(line: &str) -> Result<Step, String> {
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, r)| (v, r.trim_start()));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let step = match verb {
        "down" | "shift-down" => Step::Send(Msg::Pointer(PointerMsg::Down {
            coord: coord(&args)?,
            extend: verb == "shift-down",
        })),
        "move" => Step::Send(Msg::Pointer(PointerMsg::Move(coord(&args)?))),
        "up" => Step::Send(Msg::Pointer(PointerMsg::Up)),
        "cancel" => Step::Send(Msg::Pointer(PointerMsg::Cancel)),
        "dblclick" => Step::Send(Msg::Pointer(PointerMsg::DoubleClick(coord(&args)?))),
        "fill-handle" => Step::Send(Msg::Pointer(PointerMsg::FillHandleDown)),
        "blur" => Step::Send(Msg::FocusLost),
        "key" => {
            let keys = args.first().ok_or("missing key")?;
            Step::Key(parse_key_string(keys).map_err(|e| e.to_string())?)
        }
        "type" => Step::Type(rest.to_string()),
        "menu" => {
            let name = args.first().ok_or("missing menu item")?;
            Step::Menu(
                MenuCommand::from_name(name).ok_or_else(|| format!("unknown menu item: {}", name))?,
            )
        }
        "resize-col" => {
            Step::Send(Msg::Header(HeaderMsg::ResizeColumn {
                index: number(args.first().copied())?,
                width: number(args.get(1).copied())?,
            }))
        }
        "resize-row" => {
            Step::Send(Msg::Header(HeaderMsg::ResizeRow {
                index: number(args.first().copied())?,
                height: number(args.get(1).copied())?,
            }))
        }
        "finish-col" => Step::Send(Msg::Header(HeaderMsg::FinishColumnResize {
            index: number(args.first().copied())?,
        })),
        "finish-row" => Step::Send(Msg::Header(HeaderMsg::FinishRowResize {
            index: number(args.first().copied())?,
        })),
        other => return Err(format!("unknown command: {}", other)),
    };
    Ok(step)
}

fn number<T: FromStr>(arg: Option<&str>) -> Result<T, String> {
    let arg = arg.ok_or("missing number")?;
    arg.parse()
        .map_err(|_| format!("not a number in range: {}", arg))
}

fn pair(args: &[&str]) -> Result<(usize, usize), String> {
    Ok((number(args.first().copied())?, number(args.get(1).copied())?))
}

fn coord(args: &[&str]) -> Result<Coord, String> {
    let (row, col) = pair(args)?;
    Ok(Coord::new(row, col))
}

/// Apply parsed steps to a table in order
pub fn run_steps<H: TableHost>(table: &mut Table<H>, steps: &[Step]) {
    for step in steps {
        let handled = match step {
            Step::Send(msg) => table.send(*msg),
            Step::Key(keystroke) => table.key_down(*keystroke, None),
            Step::Type(text) => table.type_text(text),
            Step::Menu(command) => table.menu(*command),
        };
        if !handled {
            tracing::debug!(?step, "script step had no effect");
        }
    }
}
