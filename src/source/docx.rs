//! DOCX text source backed by `docx-rs`.

use crate::error::{Error, Result};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use super::TextSource;

/// DOCX text source.
///
/// Emits one line per non-empty body paragraph, concatenating the text runs
/// inside it.
#[derive(Debug, Clone, Default)]
pub struct DocxTextSource {
    _private: (),
}

impl DocxTextSource {
    /// Create a new DOCX text source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextSource for DocxTextSource {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| Error::Source(e.to_string()))?;

        let mut lines = Vec::new();
        for child in docx.document.children.iter() {
            let DocumentChild::Paragraph(para) = child else {
                continue;
            };

            let mut line = String::new();
            for pc in para.children.iter() {
                let ParagraphChild::Run(run) = pc else {
                    continue;
                };
                for rc in run.children.iter() {
                    if let RunChild::Text(t) = rc {
                        line.push_str(&t.text);
                    }
                }
            }

            if !line.trim().is_empty() {
                lines.push(line);
            }
        }

        Ok(lines.join("\n"))
    }
}
