//! # reqscan
//!
//! Heuristic extraction of document-formatting requirements from
//! Russian-language regulatory text.
//!
//! Methodological guidelines state their formatting rules in prose ("шрифт
//! Times New Roman, кегль 14, межстрочный интервал 1,5, левое поле 30 мм").
//! This library turns such text into a typed [`RequirementsModel`]: body
//! font and size, line spacing, paragraph indent, page margins and page
//! numbering. Every attribute always holds a value; attributes the text
//! does not mention keep documented defaults, and every overridden value
//! is credited to the fragment it came from.
//!
//! ## Quick Start
//!
//! ```
//! use reqscan::extract_requirements;
//!
//! fn main() -> reqscan::Result<()> {
//!     let model = extract_requirements(
//!         "Шрифт основного текста Arial, кегль 12. Левое поле 25 мм.",
//!     )?;
//!     assert_eq!(model.document.font_name, "Arial");
//!     assert_eq!(model.document.font_size_pt, 12);
//!     assert_eq!(model.margins.left_mm, 25);
//!     assert!(model.evidence.contains_key("margin_left_mm"));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: Unicode and whitespace canonicalization
//! 2. [`segment`]: split into clause-level fragments
//! 3. [`context`] and [`score`]: zone predicates and candidate ranking
//! 4. [`extract`]: per-attribute extractors and model assembly
//! 5. [`render`]: JSON and text output
//!
//! Text acquisition from files lives in [`source`]; PDF and DOCX support
//! are behind the `pdf` and `docx` features. An optional
//! [`FragmentClassifier`] can be injected into an [`Extractor`] to
//! pre-filter fragments.

pub mod classify;
pub mod context;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod render;
pub mod score;
pub mod segment;
pub mod source;

// Re-export commonly used types
pub use classify::{FragmentClassifier, FragmentLabel, KeywordClassifier, Label};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use extract::{ClassifierSummary, ExtractOptions, Extraction, ExtractionReport, Extractor};
pub use model::{
    Attribute, DocumentFormatting, FontFamily, Fragment, PageMargins, PageNumberPosition,
    PageNumbering, RequirementsModel,
};
pub use normalize::{normalize, NormalizeOptions, Normalizer};
pub use render::{JsonFormat, TextOptions};
pub use segment::{segment, SegmentOptions, Segmenter};
pub use source::{PlainTextSource, SourceRegistry, TextSource};

use rayon::prelude::*;
use std::path::Path;

/// Extract formatting requirements from raw text.
///
/// Never fails for valid text: attributes that are not found keep their
/// defaults.
///
/// # Example
///
/// ```
/// use reqscan::extract_requirements;
///
/// let model = extract_requirements("Введение").unwrap();
/// assert!(model.is_all_defaults());
/// ```
pub fn extract_requirements(raw: &str) -> Result<RequirementsModel> {
    Extractor::new().extract_model(raw)
}

/// Extract formatting requirements with custom options.
///
/// # Example
///
/// ```
/// use reqscan::{extract_requirements_with_options, ExtractOptions, SegmentOptions};
///
/// let options = ExtractOptions::new()
///     .with_segment(SegmentOptions::new().with_dash_split(false))
///     .with_evidence_clip(40);
/// let model = extract_requirements_with_options("кегль основного текста 12", &options).unwrap();
/// assert_eq!(model.document.font_size_pt, 12);
/// ```
pub fn extract_requirements_with_options(
    raw: &str,
    options: &ExtractOptions,
) -> Result<RequirementsModel> {
    Extractor::new()
        .with_options(options.clone())
        .extract_model(raw)
}

/// Extract formatting requirements from UTF-8 bytes.
///
/// A leading byte order mark is ignored. Bytes that are not valid UTF-8, or
/// that look like a binary document, are rejected with
/// [`Error::InvalidInput`].
pub fn extract_bytes(data: &[u8]) -> Result<RequirementsModel> {
    if detect::is_binary_document(data) {
        return Err(Error::InvalidInput(format!(
            "{} document given as text",
            detect_format_from_bytes(data)
        )));
    }
    let text = std::str::from_utf8(detect::strip_bom(data))?;
    extract_requirements(text)
}

/// Extract formatting requirements from a file.
///
/// The file is read through the default [`SourceRegistry`], so its format
/// decides how text is obtained.
///
/// # Example
///
/// ```no_run
/// use reqscan::extract_file;
///
/// let model = extract_file("guidelines.txt").unwrap();
/// println!("{}", model.document.font_name);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<RequirementsModel> {
    let text = SourceRegistry::with_defaults().read(path.as_ref())?;
    extract_requirements(&text)
}

/// Extract formatting requirements from a file without blocking the runtime.
#[cfg(feature = "async")]
pub async fn extract_file_async<P: AsRef<Path>>(path: P) -> Result<RequirementsModel> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let text = SourceRegistry::with_defaults().read_bytes(&bytes, ext)?;
    extract_requirements(&text)
}

/// Extract formatting requirements from many texts in parallel.
///
/// Results are returned in input order.
pub fn extract_batch(texts: &[&str]) -> Vec<Result<RequirementsModel>> {
    let extractor = Extractor::new();
    texts
        .par_iter()
        .map(|text| extractor.extract_model(text))
        .collect()
}

/// Render a model as pretty-printed JSON.
pub fn to_json(model: &RequirementsModel) -> Result<String> {
    render::to_json(model, JsonFormat::Pretty)
}
