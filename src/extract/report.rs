//! Extraction diagnostics.

use crate::classify::LabeledFragment;
use crate::model::RequirementsModel;
use serde::{Deserialize, Serialize};

/// Result of an extraction: the model plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// The extracted requirements
    pub model: RequirementsModel,

    /// How the extraction went
    pub report: ExtractionReport,
}

/// Statistics and classifier diagnostics for one extraction.
///
/// Kept separate from the model's `evidence` map so diagnostics never leak
/// into rendered requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Fragments produced by segmentation (after the fragment cap)
    pub fragment_count: usize,

    /// Fragments the extractors actually looked at
    pub considered_fragments: usize,

    /// Input exceeded the character cap and was cut
    pub input_truncated: bool,

    /// Segmentation exceeded the fragment cap and was cut
    pub fragments_truncated: bool,

    /// Classifier diagnostics, when a classifier was configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<ClassifierSummary>,

    /// Evidence keys whose source fragment had low classifier confidence
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low_confidence_evidence: Vec<String>,
}

impl ExtractionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any soft cap cut the input.
    pub fn was_truncated(&self) -> bool {
        self.input_truncated || self.fragments_truncated
    }
}

/// What the classifier did during one extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSummary {
    /// Classifier name
    pub name: String,

    /// Fragments that survived pre-filtering
    pub kept: usize,

    /// Nothing survived (or the classifier failed) and all fragments were used
    pub fell_back: bool,

    /// Why the classifier output was ignored, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// The first labelled fragments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preview: Vec<LabeledFragment>,
}

impl ClassifierSummary {
    /// Summary for a classifier whose output was ignored.
    pub fn ignored(name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kept: 0,
            fell_back: true,
            note: Some(note.into()),
            preview: Vec::new(),
        }
    }
}
