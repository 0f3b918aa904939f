//! Column and row header metadata
//!
//! Headers are optional parallel arrays to the grid dimensions. They carry
//! a display name, a size, styling hints, and resize limits.

use serde::{Deserialize, Serialize};

use super::cell::Align;

/// Column width used when no header (or no header width) is given
pub const DEFAULT_COLUMN_WIDTH: u32 = 100;
/// Row height used when no header (or no header height) is given
pub const DEFAULT_ROW_HEIGHT: u32 = 32;

const DEFAULT_MIN_COLUMN_WIDTH: u32 = 30;
const DEFAULT_MAX_COLUMN_WIDTH: u32 = 1000;
const DEFAULT_MIN_ROW_HEIGHT: u32 = 20;
const DEFAULT_MAX_ROW_HEIGHT: u32 = 200;

/// Presentation hints shared by column and row headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(flatten)]
    pub style: HeaderStyle,
    #[serde(default)]
    pub can_resize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl ColumnHeader {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn effective_width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Clamp a requested width to this header's limits
    pub fn clamp_width(&self, width: u32) -> u32 {
        let min = self.min_width.unwrap_or(DEFAULT_MIN_COLUMN_WIDTH);
        let max = self.max_width.unwrap_or(DEFAULT_MAX_COLUMN_WIDTH).max(min);
        width.clamp(min, max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowHeader {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(flatten)]
    pub style: HeaderStyle,
    #[serde(default)]
    pub can_resize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
}

impl RowHeader {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn effective_height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Clamp a requested height to this header's limits
    pub fn clamp_height(&self, height: u32) -> u32 {
        let min = self.min_height.unwrap_or(DEFAULT_MIN_ROW_HEIGHT);
        let max = self.max_height.unwrap_or(DEFAULT_MAX_ROW_HEIGHT).max(min);
        height.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_defaults() {
        let header = ColumnHeader::named("A");
        assert_eq!(header.effective_width(), DEFAULT_COLUMN_WIDTH);
        assert_eq!(header.clamp_width(5), 30);
        assert_eq!(header.clamp_width(5000), 1000);
    }

    #[test]
    fn test_row_height_respects_custom_limits() {
        let header = RowHeader {
            min_height: Some(40),
            max_height: Some(60),
            ..RowHeader::default()
        };
        assert_eq!(header.clamp_height(10), 40);
        assert_eq!(header.clamp_height(50), 50);
        assert_eq!(header.clamp_height(99), 60);
    }

    #[test]
    fn test_header_style_is_flattened() {
        let header: ColumnHeader = serde_json::from_str(
            r#"{"name":"Speed","width":140,"align":"center","canResize":true,"maxWidth":300}"#,
        )
        .unwrap();
        assert_eq!(header.name, "Speed");
        assert_eq!(header.effective_width(), 140);
        assert_eq!(header.style.align, Some(Align::Center));
        assert!(header.can_resize);
        assert_eq!(header.clamp_width(500), 300);
    }
}
