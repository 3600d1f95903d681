//! Requirement extraction pipeline.
//!
//! `raw text → normalize → segment → (classifier pre-filter) → extractors →
//! model`. The [`Extractor`] holds immutable configuration and an optional
//! injected classifier, so one instance can serve many inputs concurrently.

pub mod assemble;
pub mod attributes;
pub mod number;
mod options;
mod report;

pub use assemble::{clip_evidence, Assembly};
pub use options::ExtractOptions;
pub use report::{ClassifierSummary, Extraction, ExtractionReport};

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::classify::{self, FragmentClassifier, FragmentLabel};
use crate::error::Result;
use crate::model::{Fragment, RequirementsModel};
use crate::normalize::Normalizer;
use crate::segment::Segmenter;

/// Requirement extractor.
///
/// # Example
///
/// ```
/// use reqscan::Extractor;
///
/// let extraction = Extractor::new()
///     .extract("Шрифт основного текста Arial. Левое поле 25 мм.")
///     .unwrap();
/// assert_eq!(extraction.model.document.font_name, "Arial");
/// assert_eq!(extraction.model.margins.left_mm, 25);
/// ```
#[derive(Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
    classifier: Option<Arc<dyn FragmentClassifier>>,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("options", &self.options)
            .field("classifier", &self.classifier.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl Extractor {
    /// Create an extractor with default options and no classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Inject a fragment classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn FragmentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// The options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// The injected classifier, if any.
    pub fn classifier(&self) -> Option<&dyn FragmentClassifier> {
        self.classifier.as_deref()
    }

    /// Normalize and segment raw text, applying the soft caps.
    pub fn fragments(&self, raw: &str) -> Result<Vec<Fragment>> {
        Ok(self.fragments_capped(raw)?.0)
    }

    fn fragments_capped(&self, raw: &str) -> Result<(Vec<Fragment>, bool, bool)> {
        self.options.validate()?;

        let (raw, input_truncated) = cap_chars(raw, self.options.max_input_chars);
        if input_truncated {
            log::warn!(
                "Input exceeds {} characters; the remainder is ignored",
                self.options.max_input_chars
            );
        }

        let text = Normalizer::new(self.options.normalize).process(raw);
        let mut fragments = Segmenter::new(self.options.segment).segment(&text);

        let fragments_truncated = fragments.len() > self.options.max_fragments;
        if fragments_truncated {
            log::warn!(
                "{} fragments exceed the cap of {}; the remainder is ignored",
                fragments.len(),
                self.options.max_fragments
            );
            fragments.truncate(self.options.max_fragments);
        }

        Ok((fragments, input_truncated, fragments_truncated))
    }

    /// Extract requirements from raw text.
    pub fn extract(&self, raw: &str) -> Result<Extraction> {
        let (fragments, input_truncated, fragments_truncated) = self.fragments_capped(raw)?;
        let mut extraction = self.extract_fragments(&fragments);
        extraction.report.input_truncated = input_truncated;
        extraction.report.fragments_truncated = fragments_truncated;
        Ok(extraction)
    }

    /// Extract only the model from raw text.
    pub fn extract_model(&self, raw: &str) -> Result<RequirementsModel> {
        self.extract(raw).map(|e| e.model)
    }

    /// Extract requirements from already segmented fragments.
    pub fn extract_fragments(&self, fragments: &[Fragment]) -> Extraction {
        let mut report = ExtractionReport {
            fragment_count: fragments.len(),
            ..ExtractionReport::default()
        };

        let labels = self.labels(fragments, &mut report);
        let filtered = labels.as_ref().and_then(|labels| {
            let kept = classify::prefilter(fragments, labels, self.options.classifier_min_score);
            if let Some(summary) = report.classifier.as_mut() {
                summary.kept = kept.len();
                summary.fell_back = kept.is_empty();
            }
            if kept.is_empty() {
                log::debug!("Classifier kept no fragments; using all {}", fragments.len());
                None
            } else {
                Some(kept)
            }
        });

        let considered: &[Fragment] = filtered.as_deref().unwrap_or(fragments);
        report.considered_fragments = considered.len();

        let assembly = assemble::assemble(considered, self.options.evidence_clip_chars);

        if let Some(labels) = &labels {
            report.low_confidence_evidence = self.low_confidence(fragments, labels, &assembly);
        }

        Extraction {
            model: assembly.model,
            report,
        }
    }

    /// Extract from many inputs in parallel.
    pub fn extract_batch<S>(&self, inputs: &[S]) -> Vec<Result<Extraction>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.extract(input.as_ref()))
            .collect()
    }

    /// Run the classifier, recording its summary. Returns `None` when no
    /// classifier is configured or its output is unusable.
    fn labels(&self, fragments: &[Fragment], report: &mut ExtractionReport) -> Option<Vec<FragmentLabel>> {
        let classifier = self.classifier.as_ref()?;
        let name = classifier.name();

        let labels = match classifier.classify(fragments) {
            Ok(labels) => labels,
            Err(e) => {
                log::warn!("Classifier '{}' failed: {}", name, e);
                report.classifier = Some(ClassifierSummary::ignored(name, e.to_string()));
                return None;
            }
        };

        if labels.len() != fragments.len() {
            log::warn!(
                "Classifier '{}' returned {} labels for {} fragments; ignoring it",
                name,
                labels.len(),
                fragments.len()
            );
            report.classifier = Some(ClassifierSummary::ignored(
                name,
                format!(
                    "label count mismatch: {} labels for {} fragments",
                    labels.len(),
                    fragments.len()
                ),
            ));
            return None;
        }

        report.classifier = Some(ClassifierSummary {
            name: name.to_string(),
            preview: classify::preview(fragments, &labels),
            ..ClassifierSummary::default()
        });
        Some(labels)
    }

    fn low_confidence(
        &self,
        fragments: &[Fragment],
        labels: &[FragmentLabel],
        assembly: &Assembly<'_>,
    ) -> Vec<String> {
        let scores: HashMap<&str, f32> = fragments
            .iter()
            .zip(labels)
            .map(|(f, l)| (f.lower(), l.score))
            .collect();

        assembly
            .sources
            .iter()
            .filter(|(_, fragment)| {
                scores
                    .get(fragment.lower())
                    .map_or(false, |score| *score < self.options.low_confidence_threshold)
            })
            .map(|(attribute, _)| attribute.key().to_string())
            .collect()
    }
}

/// Cut `text` to at most `max` characters on a character boundary.
fn cap_chars(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}
