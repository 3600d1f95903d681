//! Context predicates over fragments.
//!
//! Each predicate looks at a fragment's lowercased text and answers whether
//! it belongs to a formatting zone other than the body text (headings,
//! page numbers, footnotes, tables) or carries a signal the scorer rewards.
//! Stems are Russian and matched as substrings, so inflected forms match.
//! They are cut before the fleeting vowel of the genitive plural
//! ("сноска"/"сносок"). "глава" is matched as a whole word, since "главный"
//! is not a heading.

use crate::model::{FontFamily, Fragment};
use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"номер\w*\s+страниц|нумерац|колонтитул").unwrap());
static CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bглав(?:а|ы|е|у|ой|ою|ам|ами|ах)?\b").unwrap());

const HEADING_STEMS: [&str; 1] = ["заголов"];
const MAIN_TEXT_STEMS: [&str; 1] = ["основн"];
const TEXT_STEMS: [&str; 1] = ["текст"];
const TABLE_FIGURE_STEMS: [&str; 3] = ["таблиц", "рисун", "подпис"];
const FOOTNOTE_STEMS: [&str; 2] = ["снос", "примечан"];
const LEFT_ALIGNED_STEMS: [&str; 1] = ["по левому"];

/// Mentions headings or chapters; such fragments describe heading formatting.
pub fn is_heading_context(fragment: &Fragment) -> bool {
    fragment.contains_any(&HEADING_STEMS) || CHAPTER.is_match(fragment.lower())
}

/// Mentions page numbers, numbering, or running headers/footers.
pub fn is_page_number_context(fragment: &Fragment) -> bool {
    PAGE_NUMBER.is_match(fragment.lower())
}

/// Explicitly refers to the main/body text.
pub fn is_main_text(fragment: &Fragment) -> bool {
    fragment.contains_any(&MAIN_TEXT_STEMS)
}

/// Mentions text in general.
pub fn mentions_text(fragment: &Fragment) -> bool {
    fragment.contains_any(&TEXT_STEMS)
}

/// Refers to tables, figures, or captions.
pub fn is_table_or_figure(fragment: &Fragment) -> bool {
    fragment.contains_any(&TABLE_FIGURE_STEMS)
}

/// Refers to footnotes or notes.
pub fn is_footnote(fragment: &Fragment) -> bool {
    fragment.contains_any(&FOOTNOTE_STEMS)
}

/// Mentions left alignment, which usually describes captions or lists.
pub fn is_left_aligned_hint(fragment: &Fragment) -> bool {
    fragment.contains_any(&LEFT_ALIGNED_STEMS)
}

/// The first whitelisted font family mentioned, in whitelist order.
pub fn font_family(fragment: &Fragment) -> Option<FontFamily> {
    font_family_in(fragment.lower())
}

/// The first whitelisted font family in lowercased `text`, in whitelist order.
pub fn font_family_in(text: &str) -> Option<FontFamily> {
    FontFamily::ALL
        .iter()
        .copied()
        .find(|family| text.contains(family.needle()))
}

/// Byte offset in the lowercased text where the page-number clause starts.
pub fn page_number_clause_start(fragment: &Fragment) -> Option<usize> {
    PAGE_NUMBER.find(fragment.lower()).map(|m| m.start())
}

/// Lowercased text before the page-number clause, or all of it when there
/// is no such clause.
pub fn body_clause(fragment: &Fragment) -> &str {
    let lower = fragment.lower();
    match page_number_clause_start(fragment) {
        Some(start) => &lower[..start],
        None => lower,
    }
}

/// Lowercased text from the start of the page-number clause on.
pub fn page_number_clause(fragment: &Fragment) -> Option<&str> {
    page_number_clause_start(fragment).map(|start| &fragment.lower()[start..])
}

/// Whether any whitelisted font family is mentioned.
pub fn mentions_font_family(fragment: &Fragment) -> bool {
    font_family(fragment).is_some()
}

/// Zone tags for diagnostics output.
pub fn zone_tags(fragment: &Fragment) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if is_heading_context(fragment) {
        tags.push("heading");
    }
    if is_page_number_context(fragment) {
        tags.push("page-number");
    }
    if is_main_text(fragment) {
        tags.push("main-text");
    }
    if is_table_or_figure(fragment) {
        tags.push("table/figure");
    }
    if is_footnote(fragment) {
        tags.push("footnote");
    }
    tags
}
