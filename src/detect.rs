//! Source format detection.
//!
//! Requirement documents arrive as plain text or as office/PDF files. The
//! format is sniffed from magic bytes first and from the file extension
//! second, so a mislabelled binary file is never fed to the text pipeline.

use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";
const SNIFF_LEN: usize = 8;

/// Format of a requirements source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// PDF document
    Pdf,
    /// Office Open XML word processing document (zip container)
    Docx,
    /// Legacy binary Word document (OLE compound file)
    LegacyDoc,
    /// Plain text
    Text,
}

impl SourceFormat {
    /// Whether the format needs a binary text source.
    pub fn is_binary(&self) -> bool {
        !matches!(self, SourceFormat::Text)
    }

    /// Canonical lowercase extension.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
            SourceFormat::LegacyDoc => "doc",
            SourceFormat::Text => "txt",
        }
    }

    /// Format implied by a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(SourceFormat::Pdf),
            "docx" => Some(SourceFormat::Docx),
            "doc" => Some(SourceFormat::LegacyDoc),
            "txt" | "text" | "md" => Some(SourceFormat::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceFormat::Pdf => "PDF",
            SourceFormat::Docx => "DOCX",
            SourceFormat::LegacyDoc => "DOC",
            SourceFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// Detect the format of in-memory data from its magic bytes.
///
/// Anything that is not a recognized binary container is treated as text.
pub fn detect_format_from_bytes(data: &[u8]) -> SourceFormat {
    if data.starts_with(PDF_MAGIC) {
        SourceFormat::Pdf
    } else if data.starts_with(ZIP_MAGIC) {
        SourceFormat::Docx
    } else if data.starts_with(OLE_MAGIC) {
        SourceFormat::LegacyDoc
    } else {
        SourceFormat::Text
    }
}

/// Detect the format of a file.
///
/// Magic bytes win; a text-looking file falls back to its extension, so
/// e.g. an empty `.pdf` is still reported as PDF.
///
/// # Example
/// ```no_run
/// use reqscan::detect::{detect_format_from_path, SourceFormat};
///
/// let format = detect_format_from_path("requirements.txt").unwrap();
/// assert_eq!(format, SourceFormat::Text);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    let mut header = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;

    let sniffed = detect_format_from_bytes(&header);
    if sniffed.is_binary() {
        return Ok(sniffed);
    }

    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(SourceFormat::from_extension);
    Ok(by_extension.unwrap_or(SourceFormat::Text))
}

/// Strip a leading UTF-8 byte order mark.
pub fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Check if bytes start like a binary document rather than text.
pub fn is_binary_document(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_binary()
}
