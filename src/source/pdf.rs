//! PDF text source backed by `unpdf`.

use crate::error::Result;
use std::path::Path;

use super::TextSource;

/// PDF text source.
///
/// Extracts the document's plain text; layout is irrelevant to requirement
/// extraction, which works on line-level fragments.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource {
    _private: (),
}

impl PdfTextSource {
    /// Create a new PDF text source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextSource for PdfTextSource {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(unpdf::extract_text(path)?)
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<String> {
        let doc = unpdf::parse_bytes(bytes)?;
        Ok(unpdf::render::to_text(&doc, &unpdf::RenderOptions::default())?)
    }
}
