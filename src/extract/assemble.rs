//! Requirements model assembly.
//!
//! Runs every attribute extractor over the same fragments and writes the
//! values that differ from the documented defaults, crediting each written
//! value to its source fragment. Extractors are independent: one missing
//! attribute never affects another.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::model::{Attribute, Fragment, RequirementsModel};
use crate::score::Candidate;

use super::attributes::{self, MarginSide};

/// An assembled model together with the fragment behind each evidence entry.
#[derive(Debug, Clone)]
pub struct Assembly<'a> {
    /// The populated model
    pub model: RequirementsModel,

    /// Source fragment per overridden attribute, in model order
    pub sources: Vec<(Attribute, &'a Fragment)>,
}

struct Recorder<'a> {
    clip_chars: usize,
    evidence: BTreeMap<String, String>,
    sources: Vec<(Attribute, &'a Fragment)>,
}

impl<'a> Recorder<'a> {
    fn apply<T: PartialEq + Debug>(
        &mut self,
        attribute: Attribute,
        slot: &mut T,
        found: Option<Candidate<'a, T>>,
    ) {
        let Some(found) = found else {
            log::debug!("{}: not found, keeping default", attribute);
            return;
        };
        if *slot == found.value {
            log::debug!("{}: {:?} equals the default", attribute, found.value);
            return;
        }

        log::debug!(
            "{}: {:?} (score {}) from {:?}",
            attribute,
            found.value,
            found.score,
            found.fragment.as_str()
        );
        *slot = found.value;
        self.evidence.insert(
            attribute.key().to_string(),
            clip_evidence(found.fragment.as_str(), self.clip_chars),
        );
        self.sources.push((attribute, found.fragment));
    }
}

/// Build a requirements model from fragments.
pub fn assemble(fragments: &[Fragment], clip_chars: usize) -> Assembly<'_> {
    let mut model = RequirementsModel::default();
    let mut rec = Recorder {
        clip_chars,
        evidence: BTreeMap::new(),
        sources: Vec::new(),
    };

    let doc = &mut model.document;
    rec.apply(
        Attribute::FontName,
        &mut doc.font_name,
        attributes::body_font_name(fragments).map(|c| c.map(|f| f.name().to_string())),
    );
    rec.apply(
        Attribute::FontSizePt,
        &mut doc.font_size_pt,
        attributes::body_font_size(fragments),
    );
    rec.apply(
        Attribute::LineSpacing,
        &mut doc.line_spacing,
        attributes::line_spacing(fragments),
    );
    rec.apply(
        Attribute::ParagraphIndentCm,
        &mut doc.paragraph_indent_cm,
        attributes::paragraph_indent(fragments),
    );

    let margins = &mut model.margins;
    for side in MarginSide::ALL {
        let (attribute, slot) = match side {
            MarginSide::Left => (Attribute::MarginLeftMm, &mut margins.left_mm),
            MarginSide::Right => (Attribute::MarginRightMm, &mut margins.right_mm),
            MarginSide::Top => (Attribute::MarginTopMm, &mut margins.top_mm),
            MarginSide::Bottom => (Attribute::MarginBottomMm, &mut margins.bottom_mm),
        };
        rec.apply(attribute, slot, attributes::margin(fragments, side));
    }

    let numbering = &mut model.page_numbering;
    rec.apply(
        Attribute::PageNumbering,
        &mut numbering.enabled,
        attributes::page_numbering_enabled(fragments),
    );
    rec.apply(
        Attribute::PageNumberPosition,
        &mut numbering.position,
        attributes::page_number_position(fragments),
    );
    rec.apply(
        Attribute::PageNumberFontName,
        &mut numbering.font_name,
        attributes::page_number_font_name(fragments).map(|c| c.map(|f| f.name().to_string())),
    );
    rec.apply(
        Attribute::PageNumberFontSizePt,
        &mut numbering.font_size_pt,
        attributes::page_number_font_size(fragments),
    );
    // The title page is never numbered.
    numbering.first_page_numbered = false;

    model.evidence = rec.evidence;
    Assembly {
        model,
        sources: rec.sources,
    }
}

/// Collapse whitespace and clip to `limit` characters, marking the cut
/// with an ellipsis.
pub fn clip_evidence(text: &str, limit: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= limit {
        return collapsed;
    }
    let mut clipped: String = collapsed.chars().take(limit).collect();
    clipped.truncate(clipped.trim_end().len());
    clipped.push('…');
    clipped
}
