//! Extraction options and configuration.

use crate::error::{Error, Result};
use crate::normalize::NormalizeOptions;
use crate::segment::SegmentOptions;

/// Options for requirement extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Text normalization settings
    pub normalize: NormalizeOptions,

    /// Fragment segmentation settings
    pub segment: SegmentOptions,

    /// Input beyond this many characters is ignored (soft cap)
    pub max_input_chars: usize,

    /// Fragments beyond this count are ignored (soft cap)
    pub max_fragments: usize,

    /// Evidence strings are clipped to this many characters
    pub evidence_clip_chars: usize,

    /// Minimum classifier confidence for a fragment to survive pre-filtering
    pub classifier_min_score: f32,

    /// Evidence from fragments below this confidence is reported
    pub low_confidence_threshold: f32,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, options: NormalizeOptions) -> Self {
        self.normalize = options;
        self
    }

    /// Set segmentation options.
    pub fn with_segment(mut self, options: SegmentOptions) -> Self {
        self.segment = options;
        self
    }

    /// Set the input character cap.
    pub fn with_max_input_chars(mut self, chars: usize) -> Self {
        self.max_input_chars = chars;
        self
    }

    /// Set the fragment count cap.
    pub fn with_max_fragments(mut self, count: usize) -> Self {
        self.max_fragments = count;
        self
    }

    /// Set the evidence clip length.
    pub fn with_evidence_clip(mut self, chars: usize) -> Self {
        self.evidence_clip_chars = chars;
        self
    }

    /// Set the classifier pre-filter threshold.
    pub fn with_classifier_min_score(mut self, score: f32) -> Self {
        self.classifier_min_score = score;
        self
    }

    /// Set the low-confidence annotation threshold.
    pub fn with_low_confidence_threshold(mut self, score: f32) -> Self {
        self.low_confidence_threshold = score;
        self
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> Result<()> {
        self.segment.validate()?;
        if self.max_input_chars == 0 {
            return Err(Error::InvalidOptions(
                "max_input_chars must be positive".into(),
            ));
        }
        if self.max_fragments == 0 {
            return Err(Error::InvalidOptions("max_fragments must be positive".into()));
        }
        if self.evidence_clip_chars == 0 {
            return Err(Error::InvalidOptions(
                "evidence_clip_chars must be positive".into(),
            ));
        }
        for (name, value) in [
            ("classifier_min_score", self.classifier_min_score),
            ("low_confidence_threshold", self.low_confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidOptions(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            segment: SegmentOptions::default(),
            max_input_chars: 2_000_000,
            max_fragments: 20_000,
            evidence_clip_chars: 300,
            classifier_min_score: 0.30,
            low_confidence_threshold: 0.45,
        }
    }
}
