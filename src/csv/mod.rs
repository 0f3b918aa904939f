//! CSV/TSV import and export
//!
//! Lets the harness load plain delimited data as a table and print the
//! result back out. Parsing is RFC 4180 via the `csv` crate; short rows are
//! padded so the grid is always rectangular.

mod parser;

pub use parser::{detect_delimiter, parse_csv, write_csv, ParseError};

/// Field delimiter for delimited text files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}
