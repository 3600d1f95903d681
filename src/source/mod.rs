//! Text acquisition with a plugin architecture for source formats.
//!
//! Requirement documents come as plain text, PDF, or DOCX. Each format is
//! handled by a [`TextSource`]; the [`SourceRegistry`] dispatches on the
//! sniffed format and the file extension.
//!
//! # Example
//!
//! ```no_run
//! use reqscan::source::{PlainTextSource, SourceRegistry};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> reqscan::Result<()> {
//!     let mut registry = SourceRegistry::new();
//!     registry.register(Arc::new(PlainTextSource::new()));
//!
//!     let text = registry.read(Path::new("requirements.txt"))?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

#[cfg(feature = "docx")]
mod docx;
#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "docx")]
pub use docx::DocxTextSource;
#[cfg(feature = "pdf")]
pub use pdf::PdfTextSource;
pub use text::PlainTextSource;

use crate::detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for text sources.
///
/// Implement this trait to read requirements from a new document format.
pub trait TextSource: Send + Sync {
    /// Get the supported file extensions for this source.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["txt"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Read the text of a file at the given path.
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.read_bytes(&bytes)
    }

    /// Read text from in-memory document bytes.
    fn read_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Check if this source supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text sources.
///
/// Maps file extensions and source names to sources.
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn TextSource>>,
    by_name: HashMap<String, Arc<dyn TextSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the sources compiled into this build.
    ///
    /// Plain text is always available; PDF and DOCX depend on the `pdf` and
    /// `docx` features.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextSource::new()));
        #[cfg(feature = "pdf")]
        registry.register(Arc::new(PdfTextSource::new()));
        #[cfg(feature = "docx")]
        registry.register(Arc::new(DocxTextSource::new()));
        registry
    }

    /// Register a source.
    ///
    /// The source will be registered for all its supported extensions.
    pub fn register(&mut self, source: Arc<dyn TextSource>) {
        for ext in source.supported_extensions() {
            self.sources.insert(ext.to_lowercase(), source.clone());
        }
        self.by_name.insert(source.name().to_lowercase(), source);
    }

    /// Get a source by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextSource>> {
        self.sources.get(&ext.to_lowercase()).cloned()
    }

    /// Get a source by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextSource>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.sources.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.sources.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Read the text of a file using the appropriate source.
    ///
    /// Binary documents are dispatched on their sniffed format. Text files
    /// use the source registered for their extension, falling back to the
    /// plain text source.
    pub fn read(&self, path: &Path) -> Result<String> {
        let format = detect_format_from_path(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        let source = self.resolve(format, ext)?;
        log::debug!("Reading {} with '{}' source", path.display(), source.name());
        source.read_text(path)
    }

    /// Read text from in-memory bytes, using `ext` as a hint for text data.
    pub fn read_bytes(&self, bytes: &[u8], ext: &str) -> Result<String> {
        let format = detect_format_from_bytes(bytes);
        let source = self.resolve(format, Some(ext))?;
        source.read_bytes(bytes)
    }

    fn resolve(&self, format: SourceFormat, ext: Option<&str>) -> Result<Arc<dyn TextSource>> {
        if format.is_binary() {
            return self.get_by_extension(format.extension()).ok_or_else(|| {
                Error::UnsupportedFormat(format!("no text source registered for {}", format))
            });
        }

        ext.and_then(|e| self.get_by_extension(e))
            .or_else(|| self.get_by_extension(SourceFormat::Text.extension()))
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!(
                    "no text source registered for extension '{}'",
                    ext.unwrap_or("")
                ))
            })
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
