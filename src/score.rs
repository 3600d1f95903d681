//! Point-based ranking of candidate fragments.
//!
//! When several fragments satisfy an attribute's candidate predicate (most
//! often for fonts, since "шрифт" appears in many sentences), each one is
//! scored by the context signals it carries and the best one wins. Ties keep
//! the earlier fragment, so selection is deterministic for a given
//! segmentation.

use crate::context;
use crate::model::Fragment;

/// Point weights applied per context signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Fragment explicitly describes the main/body text
    pub main_text: i32,

    /// Fragment mentions text in general
    pub text: i32,

    /// Fragment refers to tables, figures, or captions
    pub table_or_figure: i32,

    /// Fragment refers to footnotes or notes
    pub footnote: i32,

    /// Fragment is in heading context
    pub heading: i32,

    /// Fragment is in page-number context
    pub page_number: i32,

    /// A whitelisted font family literal co-occurs
    pub font_family: i32,

    /// Fragment mentions left alignment
    pub left_aligned: i32,
}

impl ScoreWeights {
    /// All weights zero: every candidate ties and the first one wins.
    pub const fn unscored() -> Self {
        Self {
            main_text: 0,
            text: 0,
            table_or_figure: 0,
            footnote: 0,
            heading: 0,
            page_number: 0,
            font_family: 0,
            left_aligned: 0,
        }
    }

    /// Weights for the body font family.
    pub const fn body_font() -> Self {
        Self {
            main_text: 10,
            text: 3,
            table_or_figure: -3,
            footnote: -5,
            heading: -3,
            page_number: -5,
            font_family: 2,
            left_aligned: 0,
        }
    }

    /// Weights for the body font size.
    pub const fn body_font_size() -> Self {
        Self {
            font_family: 1,
            ..Self::body_font()
        }
    }

    /// Weights for the page-number font family. Page-number context is
    /// required for these candidates, so it carries no penalty.
    pub const fn page_number_font() -> Self {
        Self {
            main_text: 5,
            text: 0,
            table_or_figure: -3,
            footnote: -5,
            heading: -3,
            page_number: 0,
            font_family: 2,
            left_aligned: 0,
        }
    }

    /// Weights for body-text paragraph attributes (spacing, indent).
    pub const fn text_body() -> Self {
        Self {
            main_text: 5,
            text: 0,
            table_or_figure: -3,
            footnote: -5,
            heading: -3,
            page_number: 0,
            font_family: 0,
            left_aligned: -2,
        }
    }

    /// Score a fragment.
    pub fn score(&self, fragment: &Fragment) -> i32 {
        let mut score = 0;
        if context::is_main_text(fragment) {
            score += self.main_text;
        }
        if context::mentions_text(fragment) {
            score += self.text;
        }
        if context::is_table_or_figure(fragment) {
            score += self.table_or_figure;
        }
        if context::is_footnote(fragment) {
            score += self.footnote;
        }
        if context::is_heading_context(fragment) {
            score += self.heading;
        }
        if context::is_page_number_context(fragment) {
            score += self.page_number;
        }
        if context::mentions_font_family(fragment) {
            score += self.font_family;
        }
        if context::is_left_aligned_hint(fragment) {
            score += self.left_aligned;
        }
        score
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::unscored()
    }
}

/// An eligible fragment with its parsed value and score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a, T> {
    /// The parsed and validated value
    pub value: T,

    /// The fragment the value came from
    pub fragment: &'a Fragment,

    /// Points assigned by the scorer
    pub score: i32,
}

impl<'a, T> Candidate<'a, T> {
    /// Whether the candidate reaches an acceptance threshold.
    pub fn meets(&self, threshold: Option<i32>) -> bool {
        threshold.map_or(true, |min| self.score >= min)
    }

    /// Convert the value, keeping the fragment and score.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Candidate<'a, U> {
        Candidate {
            value: f(self.value),
            fragment: self.fragment,
            score: self.score,
        }
    }
}

/// Pick the highest-scoring eligible fragment.
///
/// `eligible` returns the validated value for fragments that pass the
/// attribute's keyword, context, and range checks, and `None` otherwise.
/// Ties keep the first-encountered fragment.
pub fn pick_best<'a, T, F>(
    fragments: &'a [Fragment],
    weights: &ScoreWeights,
    mut eligible: F,
) -> Option<Candidate<'a, T>>
where
    F: FnMut(&Fragment) -> Option<T>,
{
    let mut best: Option<Candidate<'a, T>> = None;

    for fragment in fragments {
        let Some(value) = eligible(fragment) else {
            continue;
        };
        let score = weights.score(fragment);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Candidate {
                value,
                fragment,
                score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frags(texts: &[&str]) -> Vec<Fragment> {
        texts.iter().map(|t| Fragment::new(*t)).collect()
    }

    #[test]
    fn test_body_font_scores() {
        let w = ScoreWeights::body_font();
        assert_eq!(w.score(&Fragment::new("шрифт основного текста — Times New Roman")), 15);
        assert_eq!(w.score(&Fragment::new("шрифт сносок — Arial")), -3);
        assert_eq!(w.score(&Fragment::new("шрифт в таблицах Calibri")), -1);
        assert_eq!(w.score(&Fragment::new("шрифт Arial")), 2);
    }

    #[test]
    fn test_body_font_size_family_bonus_is_smaller() {
        let frag = Fragment::new("шрифт Arial 12");
        assert_eq!(ScoreWeights::body_font_size().score(&frag), 1);
        assert_eq!(ScoreWeights::body_font().score(&frag), 2);
    }

    #[test]
    fn test_page_number_font_has_no_page_penalty() {
        let frag = Fragment::new("номер страницы шрифтом Arial");
        assert_eq!(ScoreWeights::page_number_font().score(&frag), 2);
        assert_eq!(ScoreWeights::body_font().score(&frag), -3);
    }

    #[test]
    fn test_text_body_left_aligned_penalty() {
        let frag = Fragment::new("интервал 1 по левому краю");
        assert_eq!(ScoreWeights::text_body().score(&frag), -2);
    }

    #[test]
    fn test_pick_best_highest_wins() {
        let fragments = frags(&["шрифт сносок Arial", "шрифт основного текста Calibri"]);
        let best = pick_best(&fragments, &ScoreWeights::body_font(), context::font_family)
            .unwrap();
        assert_eq!(best.fragment.as_str(), "шрифт основного текста Calibri");
        assert_eq!(best.score, 15);
    }

    #[test]
    fn test_pick_best_ties_keep_first() {
        let fragments = frags(&["поле 20 мм", "поле 25 мм"]);
        let best = pick_best(&fragments, &ScoreWeights::unscored(), |f| {
            f.contains("мм").then(|| f.as_str().to_string())
        })
        .unwrap();
        assert_eq!(best.value, "поле 20 мм");
    }

    #[test]
    fn test_pick_best_none_eligible() {
        let fragments = frags(&["кегль 14"]);
        let best = pick_best(&fragments, &ScoreWeights::body_font(), context::font_family);
        assert!(best.is_none());
    }

    #[test]
    fn test_candidate_meets_threshold() {
        let frag = Fragment::new("x");
        let candidate = Candidate {
            value: (),
            fragment: &frag,
            score: 1,
        };
        assert!(candidate.meets(None));
        assert!(candidate.meets(Some(1)));
        assert!(!candidate.meets(Some(2)));
    }
}
