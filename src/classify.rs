//! Fragment classification.
//!
//! A classifier assigns each fragment a topic [`Label`] with a confidence
//! score. It is an optional, independent signal: the extractor uses it to
//! pre-filter fragments before rule matching and to flag evidence whose
//! source fragment the classifier was unsure about. Rules stay authoritative
//! for every value.
//!
//! Implementations are injected through [`FragmentClassifier`]; the crate
//! ships a deterministic [`KeywordClassifier`].

use crate::context::{is_heading_context, is_page_number_context};
use crate::error::Result;
use crate::model::Fragment;
use serde::{Deserialize, Serialize};

/// Number of labelled fragments kept in the report preview.
pub const PREVIEW_LEN: usize = 30;

/// Stems that make a fragment look like a formatting requirement at all.
const REQUIREMENT_STEMS: [&str; 20] = [
    "шрифт",
    "кегл",
    "размер",
    "times",
    "arial",
    "calibri",
    "межстроч",
    "интервал",
    "отступ",
    "абзац",
    "поле",
    "поля",
    "мм",
    "сантим",
    "см",
    "нумерац",
    "номер страницы",
    "внизу",
    "по центру",
    "колонтитул",
];

/// Topic of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Font family or size
    Font,
    /// Line spacing
    Spacing,
    /// Paragraph indent
    Indent,
    /// Page margins
    Margins,
    /// Page numbering
    Paging,
    /// Anything else
    Other,
}

impl Label {
    /// Labels that carry a formatting topic, in pre-filter group order.
    pub const TOPICS: [Label; 5] = [
        Label::Font,
        Label::Spacing,
        Label::Indent,
        Label::Margins,
        Label::Paging,
    ];

    /// Label name as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Font => "font",
            Label::Spacing => "spacing",
            Label::Indent => "indent",
            Label::Margins => "margins",
            Label::Paging => "paging",
            Label::Other => "other",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classifier's verdict for one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragmentLabel {
    /// Predicted topic
    pub label: Label,

    /// Confidence in `[0, 1]`
    pub score: f32,
}

impl FragmentLabel {
    /// Create a label.
    pub fn new(label: Label, score: f32) -> Self {
        Self { label, score }
    }
}

/// A labelled fragment for diagnostics output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledFragment {
    /// Fragment text
    pub fragment: String,

    /// Predicted topic
    pub label: Label,

    /// Confidence in `[0, 1]`
    pub score: f32,
}

/// Trait for fragment classifiers.
///
/// `classify` must return exactly one label per input fragment, in input
/// order. A classifier that fails or returns a mismatched count is ignored
/// for that extraction.
pub trait FragmentClassifier: Send + Sync {
    /// Get the classifier name.
    fn name(&self) -> &str;

    /// Label every fragment.
    fn classify(&self, fragments: &[Fragment]) -> Result<Vec<FragmentLabel>>;
}

/// Keyword-stem classifier.
///
/// Counts which topic's stems occur in a fragment; the topic with the most
/// hits wins (earlier topics win ties) and its confidence is its share of
/// all hits. Fragments without any hit are labelled [`Label::Other`] with
/// zero confidence.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Create a keyword classifier.
    pub fn new() -> Self {
        Self
    }

    fn stems(label: Label) -> &'static [&'static str] {
        match label {
            Label::Font => &["шрифт", "кегл", "размер", "times", "arial", "calibri"],
            Label::Spacing => &["межстроч", "интервал"],
            Label::Indent => &["отступ", "абзац", "красн"],
            Label::Margins => &["поле", "поля", "полей", "мм", "миллимет"],
            Label::Paging => &["нумерац", "номер страниц", "колонтитул", "внизу", "вверху"],
            Label::Other => &[],
        }
    }

    /// Label a single fragment.
    pub fn label(&self, fragment: &Fragment) -> FragmentLabel {
        let mut best = (Label::Other, 0usize);
        let mut total = 0usize;

        for label in Label::TOPICS {
            let hits = Self::stems(label)
                .iter()
                .filter(|stem| fragment.contains(stem))
                .count();
            total += hits;
            if hits > best.1 {
                best = (label, hits);
            }
        }

        if total == 0 {
            return FragmentLabel::new(Label::Other, 0.0);
        }
        FragmentLabel::new(best.0, best.1 as f32 / total as f32)
    }
}

impl FragmentClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    fn classify(&self, fragments: &[Fragment]) -> Result<Vec<FragmentLabel>> {
        Ok(fragments.iter().map(|f| self.label(f)).collect())
    }
}

/// Whether a fragment mentions any formatting-requirement stem.
pub fn looks_like_requirement(fragment: &Fragment) -> bool {
    fragment.contains_any(&REQUIREMENT_STEMS)
}

/// Keep the fragments a classifier marks as relevant.
///
/// A fragment survives when its label is a topic, its score reaches
/// `min_score`, and it looks like a requirement. Font fragments in heading
/// or page-number context and spacing/indent fragments in heading context
/// are dropped. Survivors are grouped by topic in [`Label::TOPICS`] order,
/// keeping input order within a group. An empty result means the caller
/// should fall back to the unfiltered fragments.
pub fn prefilter(fragments: &[Fragment], labels: &[FragmentLabel], min_score: f32) -> Vec<Fragment> {
    let mut groups: [Vec<&Fragment>; 5] = Default::default();

    for (fragment, label) in fragments.iter().zip(labels) {
        if label.label == Label::Other || label.score < min_score {
            continue;
        }
        if !looks_like_requirement(fragment) {
            continue;
        }

        let slot = match label.label {
            Label::Font => {
                if is_heading_context(fragment) || is_page_number_context(fragment) {
                    continue;
                }
                0
            }
            Label::Spacing | Label::Indent if is_heading_context(fragment) => continue,
            Label::Spacing => 1,
            Label::Indent => 2,
            Label::Margins => 3,
            Label::Paging => 4,
            Label::Other => continue,
        };
        groups[slot].push(fragment);
    }

    groups.into_iter().flatten().cloned().collect()
}

/// Pair fragments with their labels for the report preview.
pub fn preview(fragments: &[Fragment], labels: &[FragmentLabel]) -> Vec<LabeledFragment> {
    fragments
        .iter()
        .zip(labels)
        .take(PREVIEW_LEN)
        .map(|(fragment, label)| LabeledFragment {
            fragment: fragment.as_str().to_string(),
            label: label.label,
            score: label.score,
        })
        .collect()
}
