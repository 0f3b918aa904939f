//! Cell type for the grid store
//!
//! A cell is a string value plus optional presentation hints. Cells carry no
//! identity of their own: a cell is whatever sits at a (row, column) position.

use serde::{Deserialize, Deserializer, Serialize};

/// Horizontal text alignment hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// One grid position's value plus optional styling/editability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Cell text. Missing or null in host data means empty; numbers and
    /// booleans are stored in their string form.
    #[serde(default, deserialize_with = "value_as_string")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// `Some(false)` locks the cell; absent means editable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
}

/// Scalar host value accepted in a cell's `value` field
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

fn value_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawValue>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawValue::Text(text)) => text,
        Some(RawValue::Bool(b)) => b.to_string(),
        Some(RawValue::Int(n)) => n.to_string(),
        Some(RawValue::UInt(n)) => n.to_string(),
        Some(RawValue::Float(n)) => n.to_string(),
    };
    Ok(value)
}

impl Cell {
    /// Empty, default-styled cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Default-styled cell holding `value`
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Builder: mark the cell read-only
    pub fn locked(mut self) -> Self {
        self.editable = Some(false);
        self
    }

    /// The cell's own editability flag (the table-wide flag is applied by the grid)
    pub fn is_editable(&self) -> bool {
        self.editable != Some(false)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::with_value(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::with_value(value)
    }
}
