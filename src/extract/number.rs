//! Locale-flexible number parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)?").unwrap());

/// Parse a number that may use a comma as the decimal separator.
fn parse_decimal(s: &str) -> Option<f64> {
    s.replace(',', ".").parse::<f64>().ok()
}

/// The first number in `text`.
pub fn first_number(text: &str) -> Option<f64> {
    NUMBER.find(text).and_then(|m| parse_decimal(m.as_str()))
}

/// The first number at or after byte offset `from`.
fn number_from(text: &str, from: usize) -> Option<f64> {
    NUMBER
        .find_at(text, from)
        .and_then(|m| parse_decimal(m.as_str()))
}

/// The number belonging to the earliest of `anchors` in `text`.
///
/// Takes the first number following the anchor keyword, and falls back to
/// the first number in the text when nothing follows it (e.g. "14 кегль").
/// Without any anchor present this is just the first number.
pub fn anchored_number(text: &str, anchors: &[&str]) -> Option<f64> {
    let anchor = anchors.iter().filter_map(|a| text.find(a)).min();
    match anchor {
        Some(pos) => number_from(text, pos).or_else(|| first_number(text)),
        None => first_number(text),
    }
}

/// The first acceptable number belonging to one of `anchors`.
///
/// Anchors are tried in the given order, and every occurrence of an anchor
/// in text order. The number after an occurrence is taken only if `accept`
/// holds for it, so a stray value of another attribute following a weak
/// anchor does not shadow the right one further on. Falls back to the first
/// number in the text, again only if it is acceptable.
pub fn anchored_number_within<F>(text: &str, anchors: &[&str], accept: F) -> Option<f64>
where
    F: Fn(f64) -> bool,
{
    anchors
        .iter()
        .flat_map(|anchor| text.match_indices(*anchor).map(|(pos, _)| pos))
        .filter_map(|pos| number_from(text, pos))
        .find(|n| accept(*n))
        .or_else(|| first_number(text).filter(|n| accept(*n)))
}

/// Truncate a point size to whole points.
pub fn whole_points(value: f64) -> u32 {
    value.trunc() as u32
}

/// Round a millimeter value to the nearest whole millimeter.
pub fn whole_millimeters(value: f64) -> u32 {
    value.round() as u32
}
