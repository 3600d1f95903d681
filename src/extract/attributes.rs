//! One extractor per model attribute.
//!
//! Every extractor has the same shape: an eligibility closure (keyword gate,
//! context guard, value parsing, range check) handed to [`pick_best`], an
//! attribute-specific set of score weights, and an optional acceptance
//! threshold. An extractor that finds nothing returns `None`.

use std::ops::RangeInclusive;

use crate::context::{
    body_clause, font_family_in, is_heading_context, is_page_number_context, is_table_or_figure,
    page_number_clause,
};
use crate::model::{FontFamily, Fragment, PageNumberPosition};
use crate::score::{pick_best, Candidate, ScoreWeights};

use super::number::{anchored_number, anchored_number_within, whole_millimeters, whole_points};

/// Minimum score for the body font family.
pub const FONT_NAME_THRESHOLD: i32 = 2;
/// Minimum score for the body font size.
pub const FONT_SIZE_THRESHOLD: i32 = 1;
/// Minimum score for the page-number font family.
pub const PAGE_NUMBER_FONT_THRESHOLD: i32 = -2;

/// Valid font sizes in points.
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 6.0..=30.0;
/// Valid line spacing multipliers.
pub const LINE_SPACING_RANGE: RangeInclusive<f64> = 1.0..=3.0;
/// Valid paragraph indents in centimeters.
pub const INDENT_RANGE_CM: RangeInclusive<f64> = 0.5..=3.0;

const FONT: &str = "шрифт";
const FONT_SIZE_STEMS: [&str; 2] = ["шрифт", "кегл"];
const FONT_SIZE_ANCHORS: [&str; 3] = ["кегл", "размер", "шрифт"];
const SPACING_STEMS: [&str; 2] = ["межстроч", "интервал"];
const INDENT_ANCHORS: [&str; 3] = ["отступ", "красн", "абзац"];
const MILLIMETER_STEMS: [&str; 2] = ["мм", "миллимет"];

/// A side of the page for margin extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    /// Left margin
    Left,
    /// Right margin
    Right,
    /// Top margin
    Top,
    /// Bottom margin
    Bottom,
}

impl MarginSide {
    /// All sides in model order.
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Left,
        MarginSide::Right,
        MarginSide::Top,
        MarginSide::Bottom,
    ];

    fn stem(&self) -> &'static str {
        match self {
            MarginSide::Left => "лев",
            MarginSide::Right => "прав",
            MarginSide::Top => "верх",
            MarginSide::Bottom => "ниж",
        }
    }
}

/// Font family of the main text.
///
/// Only the part of a fragment before a page-number clause counts, so a
/// sentence that goes on to describe page numbering still yields its body
/// font.
pub fn body_font_name(fragments: &[Fragment]) -> Option<Candidate<'_, FontFamily>> {
    pick_best(fragments, &ScoreWeights::body_font(), |f| {
        if is_heading_context(f) {
            return None;
        }
        let body = body_clause(f);
        if !body.contains(FONT) {
            return None;
        }
        font_family_in(body)
    })
    .filter(|c| c.meets(Some(FONT_NAME_THRESHOLD)))
}

/// Font size of the main text in whole points.
pub fn body_font_size(fragments: &[Fragment]) -> Option<Candidate<'_, u32>> {
    pick_best(fragments, &ScoreWeights::body_font_size(), |f| {
        if is_heading_context(f) {
            return None;
        }
        let body = body_clause(f);
        if !FONT_SIZE_STEMS.iter().any(|stem| body.contains(stem)) {
            return None;
        }
        anchored_number_within(body, &FONT_SIZE_ANCHORS, |n| FONT_SIZE_RANGE.contains(&n))
            .map(whole_points)
    })
    .filter(|c| c.meets(Some(FONT_SIZE_THRESHOLD)))
}

/// Font family of page numbers, named within the page-number clause.
pub fn page_number_font_name(fragments: &[Fragment]) -> Option<Candidate<'_, FontFamily>> {
    pick_best(fragments, &ScoreWeights::page_number_font(), |f| {
        page_number_clause(f).and_then(font_family_in)
    })
    .filter(|c| c.meets(Some(PAGE_NUMBER_FONT_THRESHOLD)))
}

/// Line spacing multiplier.
pub fn line_spacing(fragments: &[Fragment]) -> Option<Candidate<'_, f64>> {
    pick_best(fragments, &ScoreWeights::text_body(), |f| {
        if !f.contains_any(&SPACING_STEMS) || is_heading_context(f) {
            return None;
        }
        anchored_number_within(f.lower(), &SPACING_STEMS, |n| LINE_SPACING_RANGE.contains(&n))
    })
}

/// First-line paragraph indent in centimeters.
pub fn paragraph_indent(fragments: &[Fragment]) -> Option<Candidate<'_, f64>> {
    pick_best(fragments, &ScoreWeights::text_body(), |f| {
        let mentions_indent = (f.contains("абзац") && f.contains_any(&["отступ", "красн"]))
            || (f.contains("отступ") && f.contains("первой строки"));
        if !mentions_indent || is_heading_context(f) {
            return None;
        }
        anchored_number_within(f.lower(), &INDENT_ANCHORS, |n| INDENT_RANGE_CM.contains(&n))
    })
}

/// Margin for one side of the page in whole millimeters.
pub fn margin(fragments: &[Fragment], side: MarginSide) -> Option<Candidate<'_, u32>> {
    let stem = side.stem();
    pick_best(fragments, &ScoreWeights::unscored(), |f| {
        if !(f.contains(stem) && f.contains("пол") && f.contains_any(&MILLIMETER_STEMS)) {
            return None;
        }
        anchored_number(f.lower(), &[stem])
            .map(whole_millimeters)
            .filter(|mm| *mm > 0)
    })
}

/// Whether pages are numbered.
pub fn page_numbering_enabled(fragments: &[Fragment]) -> Option<Candidate<'_, bool>> {
    pick_best(fragments, &ScoreWeights::unscored(), |f| {
        f.contains_all(&["нумерац", "страниц"]).then_some(true)
    })
}

/// Placement of page numbers.
pub fn page_number_position(fragments: &[Fragment]) -> Option<Candidate<'_, PageNumberPosition>> {
    pick_best(fragments, &ScoreWeights::unscored(), position_of)
}

fn position_of(f: &Fragment) -> Option<PageNumberPosition> {
    let page_number = is_page_number_context(f) || (f.contains("номер") && !is_table_or_figure(f));
    if !page_number {
        return None;
    }

    let center = f.contains("цент");
    let right = f.contains_any(&["справа", "правом", "правому"]);
    let left = f.contains_any(&["слева", "левом", "левому"]);

    if f.contains("внизу") {
        if center {
            Some(PageNumberPosition::BottomCenter)
        } else if right {
            Some(PageNumberPosition::BottomRight)
        } else if left {
            Some(PageNumberPosition::BottomLeft)
        } else {
            None
        }
    } else if f.contains_any(&["вверху", "сверху"]) && center {
        Some(PageNumberPosition::TopCenter)
    } else {
        None
    }
}

/// Font size of page numbers in whole points.
pub fn page_number_font_size(fragments: &[Fragment]) -> Option<Candidate<'_, u32>> {
    pick_best(fragments, &ScoreWeights::unscored(), |f| {
        if !f.contains_all(&["номер", "страниц", FONT]) {
            return None;
        }
        let clause = page_number_clause(f).unwrap_or_else(|| f.lower());
        anchored_number_within(clause, &[FONT], |n| FONT_SIZE_RANGE.contains(&n)).map(whole_points)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frags(texts: &[&str]) -> Vec<Fragment> {
        texts.iter().map(|t| Fragment::new(*t)).collect()
    }

    #[test]
    fn test_body_font_prefers_main_text_over_footnote() {
        let a = frags(&["шрифт сносок — Arial", "шрифт основного текста — Calibri"]);
        let b = frags(&["шрифт основного текста — Calibri", "шрифт сносок — Arial"]);
        assert_eq!(body_font_name(&a).unwrap().value, FontFamily::Calibri);
        assert_eq!(body_font_name(&b).unwrap().value, FontFamily::Calibri);
    }

    #[test]
    fn test_body_font_below_threshold_is_rejected() {
        let fragments = frags(&["шрифт сносок — Arial"]);
        assert!(body_font_name(&fragments).is_none());
    }

    #[test]
    fn test_body_font_excludes_headings_and_page_numbers() {
        let fragments = frags(&["шрифт заголовков Arial", "шрифт номера страницы Calibri"]);
        assert!(body_font_name(&fragments).is_none());
    }

    #[test]
    fn test_body_font_requires_font_keyword() {
        let fragments = frags(&["Times New Roman"]);
        assert!(body_font_name(&fragments).is_none());
    }

    #[test]
    fn test_body_font_size() {
        let fragments = frags(&["Шрифт основного текста Arial, кегль 12"]);
        let found = body_font_size(&fragments).unwrap();
        assert_eq!(found.value, 12);
    }

    #[test]
    fn test_body_font_size_range_and_threshold() {
        assert!(body_font_size(&frags(&["кегль 48 в тексте"])).is_none());
        // no positive signal: score 0 is below the threshold
        assert!(body_font_size(&frags(&["кегль 12"])).is_none());
        assert_eq!(body_font_size(&frags(&["кегль 12,5 для текста"])).unwrap().value, 12);
    }

    #[test]
    fn test_body_font_size_excludes_headings() {
        let fragments = frags(&["шрифт заголовков 16 текст", "шрифт текста 13"]);
        assert_eq!(body_font_size(&fragments).unwrap().value, 13);
    }

    #[test]
    fn test_page_number_font_name() {
        let fragments = frags(&["номера страниц проставляются шрифтом Arial"]);
        assert_eq!(page_number_font_name(&fragments).unwrap().value, FontFamily::Arial);
        assert!(page_number_font_name(&frags(&["шрифт Arial"])).is_none());
    }

    #[test]
    fn test_body_font_ignores_footnote_and_chapter_forms() {
        assert!(body_font_name(&frags(&["шрифт сносок Arial"])).is_none());
        assert!(body_font_name(&frags(&["Главы набираются шрифтом Arial"])).is_none());
        assert!(body_font_name(&frags(&["перед каждой главой шрифт Arial"])).is_none());
    }

    #[test]
    fn test_body_font_size_skips_value_of_other_keyword() {
        let fragments = frags(&["Шрифт основного текста Arial, межстрочный интервал 1,5, кегль 12"]);
        assert_eq!(body_font_size(&fragments).unwrap().value, 12);
        assert_eq!(line_spacing(&fragments).unwrap().value, 1.5);
    }

    #[test]
    fn test_body_font_before_page_number_clause() {
        let fragments = frags(&["шрифт основного текста Arial, нумерация страниц внизу"]);
        assert_eq!(body_font_name(&fragments).unwrap().value, FontFamily::Arial);
        assert!(page_number_font_name(&fragments).is_none());

        let after = frags(&["нумерация страниц внизу, шрифт Arial"]);
        assert!(body_font_name(&after).is_none());
        assert_eq!(page_number_font_name(&after).unwrap().value, FontFamily::Arial);
    }

    #[test]
    fn test_body_font_size_before_page_number_clause() {
        let fragments = frags(&["основной шрифт кегль 13, номер страницы шрифтом 10"]);
        assert_eq!(body_font_size(&fragments).unwrap().value, 13);
        assert_eq!(page_number_font_size(&fragments).unwrap().value, 10);
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(line_spacing(&frags(&["межстрочный интервал 1,5"])).unwrap().value, 1.5);
        assert!(line_spacing(&frags(&["интервал 6 пт"])).is_none());
        assert!(line_spacing(&frags(&["интервал в заголовках 2"])).is_none());
    }

    #[test]
    fn test_line_spacing_prefers_main_text() {
        let fragments = frags(&["интервал в сносках 1", "интервал основного текста 2"]);
        assert_eq!(line_spacing(&fragments).unwrap().value, 2.0);
    }

    #[test]
    fn test_paragraph_indent() {
        assert_eq!(paragraph_indent(&frags(&["Абзацный отступ 1,27 см"])).unwrap().value, 1.27);
        assert_eq!(
            paragraph_indent(&frags(&["отступ первой строки 1 см"])).unwrap().value,
            1.0
        );
        assert!(paragraph_indent(&frags(&["абзацный отступ 12,5 мм"])).is_none());
        assert!(paragraph_indent(&frags(&["отступ 1 см"])).is_none());
    }

    #[test]
    fn test_margins_by_side() {
        let fragments = frags(&[
            "левое поле 30 мм, правое поле 10 мм, верхнее поле 20 мм, нижнее поле 25 мм",
        ]);
        assert_eq!(margin(&fragments, MarginSide::Left).unwrap().value, 30);
        assert_eq!(margin(&fragments, MarginSide::Right).unwrap().value, 10);
        assert_eq!(margin(&fragments, MarginSide::Top).unwrap().value, 20);
        assert_eq!(margin(&fragments, MarginSide::Bottom).unwrap().value, 25);
    }

    #[test]
    fn test_margin_requires_millimeters() {
        assert!(margin(&frags(&["левое поле 3 см"]), MarginSide::Left).is_none());
        assert_eq!(
            margin(&frags(&["левое поле 24,6 миллиметра"]), MarginSide::Left)
                .unwrap()
                .value,
            25
        );
    }

    #[test]
    fn test_margin_first_eligible_wins() {
        let fragments = frags(&["левое поле 30 мм", "левое поле 25 мм"]);
        assert_eq!(margin(&fragments, MarginSide::Left).unwrap().value, 30);
    }

    #[test]
    fn test_page_numbering_enabled() {
        assert!(page_numbering_enabled(&frags(&["нумерация страниц сквозная"])).is_some());
        assert!(page_numbering_enabled(&frags(&["нумерация рисунков"])).is_none());
    }

    #[test]
    fn test_page_number_position_variants() {
        let cases = [
            ("номер страницы внизу по центру", PageNumberPosition::BottomCenter),
            ("номер страницы внизу справа", PageNumberPosition::BottomRight),
            ("нумерация внизу слева", PageNumberPosition::BottomLeft),
            ("номер страницы вверху по центру", PageNumberPosition::TopCenter),
        ];
        for (text, expected) in cases {
            let fragments = frags(&[text]);
            assert_eq!(page_number_position(&fragments).unwrap().value, expected, "{}", text);
        }
        assert!(page_number_position(&frags(&["внизу по центру"])).is_none());
        assert!(page_number_position(&frags(&["номер страницы вверху справа"])).is_none());
    }

    #[test]
    fn test_figure_and_table_numbers_do_not_place_page_numbers() {
        assert!(page_number_position(&frags(&["Номера рисунков ставятся внизу справа"])).is_none());
        assert!(page_number_position(&frags(&["номер таблицы внизу по центру"])).is_none());
        assert_eq!(
            page_number_position(&frags(&["номер ставится внизу по центру"]))
                .unwrap()
                .value,
            PageNumberPosition::BottomCenter
        );
    }

    #[test]
    fn test_page_number_font_size() {
        let fragments = frags(&["номер страницы печатается шрифтом 10 пт"]);
        assert_eq!(page_number_font_size(&fragments).unwrap().value, 10);
        assert!(page_number_font_size(&frags(&["номер страницы шрифтом 40"])).is_none());
    }
}
