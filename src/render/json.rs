//! JSON rendering for requirements models and extraction results.

use crate::error::{Error, Result};
use crate::model::RequirementsModel;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a model (or an [`Extraction`](crate::Extraction)) to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Parse a model previously rendered with [`to_json`].
pub fn model_from_json(json: &str) -> Result<RequirementsModel> {
    serde_json::from_str(json).map_err(|e| Error::InvalidInput(format!("invalid model JSON: {}", e)))
}
