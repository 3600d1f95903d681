//! The structured requirements produced by an extraction pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Font families the extractors recognize, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Times New Roman
    TimesNewRoman,
    /// Arial
    Arial,
    /// Calibri
    Calibri,
}

impl FontFamily {
    /// All recognized families, in matching priority order.
    pub const ALL: [FontFamily; 3] = [
        FontFamily::TimesNewRoman,
        FontFamily::Arial,
        FontFamily::Calibri,
    ];

    /// Display name as written into the model.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Arial => "Arial",
            FontFamily::Calibri => "Calibri",
        }
    }

    /// Lowercase literal searched for in fragment text.
    pub fn needle(&self) -> &'static str {
        match self {
            FontFamily::TimesNewRoman => "times new roman",
            FontFamily::Arial => "arial",
            FontFamily::Calibri => "calibri",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where page numbers are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageNumberPosition {
    /// Bottom of the page, centered
    #[default]
    BottomCenter,
    /// Bottom of the page, right-aligned
    BottomRight,
    /// Bottom of the page, left-aligned
    BottomLeft,
    /// Top of the page, centered
    TopCenter,
}

impl PageNumberPosition {
    /// Stable snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageNumberPosition::BottomCenter => "bottom_center",
            PageNumberPosition::BottomRight => "bottom_right",
            PageNumberPosition::BottomLeft => "bottom_left",
            PageNumberPosition::TopCenter => "top_center",
        }
    }
}

impl fmt::Display for PageNumberPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-text formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFormatting {
    /// Font family of the main text
    pub font_name: String,

    /// Font size of the main text in points
    pub font_size_pt: u32,

    /// Line spacing multiplier
    pub line_spacing: f64,

    /// First-line paragraph indent in centimeters
    pub paragraph_indent_cm: f64,
}

impl Default for DocumentFormatting {
    fn default() -> Self {
        Self {
            font_name: FontFamily::TimesNewRoman.name().to_string(),
            font_size_pt: 14,
            line_spacing: 1.5,
            paragraph_indent_cm: 1.25,
        }
    }
}

/// Page margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Left margin
    pub left_mm: u32,
    /// Right margin
    pub right_mm: u32,
    /// Top margin
    pub top_mm: u32,
    /// Bottom margin
    pub bottom_mm: u32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            left_mm: 30,
            right_mm: 15,
            top_mm: 20,
            bottom_mm: 20,
        }
    }
}

/// Page numbering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNumbering {
    /// Whether pages are numbered at all
    pub enabled: bool,

    /// Placement of the page number
    pub position: PageNumberPosition,

    /// Font family of the page number
    pub font_name: String,

    /// Font size of the page number in points
    pub font_size_pt: u32,

    /// Whether the first (title) page carries a number
    pub first_page_numbered: bool,
}

impl Default for PageNumbering {
    fn default() -> Self {
        Self {
            enabled: true,
            position: PageNumberPosition::BottomCenter,
            font_name: FontFamily::TimesNewRoman.name().to_string(),
            font_size_pt: 12,
            first_page_numbered: false,
        }
    }
}

/// Formatting requirements extracted from regulatory text.
///
/// Every field always holds a value; a field without an `evidence` entry
/// kept its documented default. The `evidence` map is diagnostic only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequirementsModel {
    /// Body-text formatting
    pub document: DocumentFormatting,

    /// Page margins
    pub margins: PageMargins,

    /// Page numbering rules
    pub page_numbering: PageNumbering,

    /// Source fragment credited for each overridden attribute, keyed by attribute key
    pub evidence: BTreeMap<String, String>,
}

impl RequirementsModel {
    /// Create a model holding only defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every attribute kept its default.
    pub fn is_all_defaults(&self) -> bool {
        self.evidence.is_empty()
    }

    /// Evidence for an attribute key, if it was overridden.
    pub fn evidence_for(&self, key: &str) -> Option<&str> {
        self.evidence.get(key).map(|s| s.as_str())
    }
}
