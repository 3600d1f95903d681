//! Attribute identifiers used as evidence keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An extractable attribute of the requirements model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Body font family
    FontName,
    /// Body font size
    FontSizePt,
    /// Line spacing
    LineSpacing,
    /// First-line paragraph indent
    ParagraphIndentCm,
    /// Left margin
    MarginLeftMm,
    /// Right margin
    MarginRightMm,
    /// Top margin
    MarginTopMm,
    /// Bottom margin
    MarginBottomMm,
    /// Page numbering on/off
    PageNumbering,
    /// Page number placement
    PageNumberPosition,
    /// Page number font family
    PageNumberFontName,
    /// Page number font size
    PageNumberFontSizePt,
}

impl Attribute {
    /// Every attribute, in model order.
    pub const ALL: [Attribute; 12] = [
        Attribute::FontName,
        Attribute::FontSizePt,
        Attribute::LineSpacing,
        Attribute::ParagraphIndentCm,
        Attribute::MarginLeftMm,
        Attribute::MarginRightMm,
        Attribute::MarginTopMm,
        Attribute::MarginBottomMm,
        Attribute::PageNumbering,
        Attribute::PageNumberPosition,
        Attribute::PageNumberFontName,
        Attribute::PageNumberFontSizePt,
    ];

    /// The evidence key for this attribute.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::FontName => "font_name",
            Attribute::FontSizePt => "font_size_pt",
            Attribute::LineSpacing => "line_spacing",
            Attribute::ParagraphIndentCm => "paragraph_indent_cm",
            Attribute::MarginLeftMm => "margin_left_mm",
            Attribute::MarginRightMm => "margin_right_mm",
            Attribute::MarginTopMm => "margin_top_mm",
            Attribute::MarginBottomMm => "margin_bottom_mm",
            Attribute::PageNumbering => "page_numbering",
            Attribute::PageNumberPosition => "page_number_position",
            Attribute::PageNumberFontName => "page_number_font_name",
            Attribute::PageNumberFontSizePt => "page_number_font_size_pt",
        }
    }

    /// Look up an attribute by its evidence key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.key() == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
