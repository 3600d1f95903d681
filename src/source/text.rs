//! Plain text source.

use crate::detect::{is_binary_document, strip_bom};
use crate::error::{Error, Result};
use std::borrow::Cow;

use super::TextSource;

/// Plain text source.
///
/// Decodes UTF-8 leniently: undecodable byte sequences are dropped rather
/// than failing the read, since requirement files are often saved by tools
/// that mix encodings. Binary documents are rejected.
#[derive(Debug, Clone, Default)]
pub struct PlainTextSource {
    _private: (),
}

impl PlainTextSource {
    /// Create a new plain text source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextSource for PlainTextSource {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<String> {
        if is_binary_document(bytes) {
            return Err(Error::UnsupportedFormat(
                "binary document given to the plain text source".into(),
            ));
        }

        let text = match String::from_utf8_lossy(strip_bom(bytes)) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => {
                log::debug!("Dropping undecodable bytes from text input");
                s.replace(char::REPLACEMENT_CHARACTER, "")
            }
        };
        Ok(text)
    }
}
