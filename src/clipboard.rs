//! Clipboard bridge
//!
//! Keeps an internal buffer of the last copied cells and mirrors copies to an
//! environment clipboard through [`ClipboardPort`]. Text interchange is plain
//! TSV: `\t` between cells, `\n` between rows, no escaping.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::model::{Bounds, Cell, Grid};

/// Environment clipboard failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard in this environment
    Unavailable,
    /// The clipboard exists but could not be read or written
    Access(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard unavailable"),
            ClipboardError::Access(e) => write!(f, "clipboard access failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Text access to the environment clipboard
pub trait ClipboardPort {
    /// Current clipboard text; `Ok(None)` when it holds no text
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// OS clipboard via arboard (a fresh handle per call)
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable,
            other => ClipboardError::Access(other.to_string()),
        })
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardPort for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        match Self::open()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::Access(e.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        Self::open()?
            .set_text(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// Environment without a clipboard: reads are empty, writes fail
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardPort for NoClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Err(ClipboardError::Unavailable)
    }

    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    text: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-process clipboard. Clones share the same contents, so a test can keep
/// a handle while the engine owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<String> {
        self.state.borrow().text.clone()
    }

    /// Simulate another application writing to the clipboard
    pub fn set_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().text = Some(text.into());
    }

    pub fn clear(&self) {
        self.state.borrow_mut().text = None;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl ClipboardPort for MemoryClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(ClipboardError::Access("read refused".into()));
        }
        Ok(state.text.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(ClipboardError::Access("write refused".into()));
        }
        state.text = Some(text.to_string());
        Ok(())
    }
}

/// Serialize a rectangle of cells as clipboard text
pub fn serialize_cells(cells: &[Vec<Cell>]) -> String {
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.value.as_str())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse clipboard text into rows of values
///
/// CRLF is accepted, and one trailing line break is ignored.
pub fn parse_clipboard_text(text: &str) -> Vec<Vec<String>> {
    let text = text.replace("\r\n", "\n");
    let text = text.strip_suffix('\n').unwrap_or(&text);
    text.split('\n')
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Internal copy buffer plus the environment clipboard port
pub struct ClipboardBridge {
    buffer: Option<Vec<Vec<Cell>>>,
    port: Box<dyn ClipboardPort>,
}

impl fmt::Debug for ClipboardBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardBridge")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

impl Default for ClipboardBridge {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl ClipboardBridge {
    pub fn new(port: Box<dyn ClipboardPort>) -> Self {
        Self { buffer: None, port }
    }

    /// Bridge to the OS clipboard when the feature is enabled
    pub fn system() -> Self {
        #[cfg(feature = "system-clipboard")]
        {
            Self::new(Box::new(SystemClipboard))
        }
        #[cfg(not(feature = "system-clipboard"))]
        {
            Self::disconnected()
        }
    }

    /// Internal buffer only
    pub fn disconnected() -> Self {
        Self::new(Box::new(NoClipboard))
    }

    pub fn buffer(&self) -> Option<&[Vec<Cell>]> {
        self.buffer.as_deref()
    }

    /// Copy a rectangle into the buffer and the environment clipboard.
    /// Returns the serialized text.
    pub fn copy(&mut self, grid: &Grid, bounds: Bounds) -> String {
        let cells = grid.extract(bounds);
        let text = serialize_cells(&cells);
        self.buffer = Some(cells);

        if let Err(e) = self.port.write_text(&text) {
            tracing::warn!("Clipboard write failed, keeping internal copy: {}", e);
        }
        text
    }

    /// Cells to paste: environment text when present, else the buffer
    pub fn paste_source(&mut self) -> Option<Vec<Vec<Cell>>> {
        match self.port.read_text() {
            Ok(Some(text)) if !text.is_empty() => Some(
                parse_clipboard_text(&text)
                    .into_iter()
                    .map(|row| row.into_iter().map(Cell::from).collect())
                    .collect(),
            ),
            Ok(_) => self.buffer.clone(),
            Err(e) => {
                tracing::debug!("Clipboard read failed, using internal buffer: {}", e);
                self.buffer.clone()
            }
        }
    }
}
