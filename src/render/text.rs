//! Human-readable text rendering.

use crate::model::{Attribute, RequirementsModel};

use super::TextOptions;

/// Render a model as a text summary with default options.
pub fn to_text(model: &RequirementsModel) -> String {
    to_text_with_options(model, &TextOptions::default())
}

/// Render a model as a text summary.
pub fn to_text_with_options(model: &RequirementsModel, options: &TextOptions) -> String {
    let mut out = String::new();
    let doc = &model.document;
    let margins = &model.margins;
    let numbering = &model.page_numbering;

    let line = |out: &mut String, attribute: Attribute, label: &str, value: String| {
        let mark = if options.mark_overrides && model.evidence.contains_key(attribute.key()) {
            " *"
        } else {
            ""
        };
        out.push_str(&format!("{}{}: {}{}\n", options.indent, label, value, mark));
    };

    out.push_str("Body text\n");
    line(&mut out, Attribute::FontName, "Font", doc.font_name.clone());
    line(&mut out, Attribute::FontSizePt, "Font size", format!("{} pt", doc.font_size_pt));
    line(&mut out, Attribute::LineSpacing, "Line spacing", doc.line_spacing.to_string());
    line(
        &mut out,
        Attribute::ParagraphIndentCm,
        "Paragraph indent",
        format!("{} cm", doc.paragraph_indent_cm),
    );

    out.push_str("Margins\n");
    line(&mut out, Attribute::MarginLeftMm, "Left", format!("{} mm", margins.left_mm));
    line(&mut out, Attribute::MarginRightMm, "Right", format!("{} mm", margins.right_mm));
    line(&mut out, Attribute::MarginTopMm, "Top", format!("{} mm", margins.top_mm));
    line(&mut out, Attribute::MarginBottomMm, "Bottom", format!("{} mm", margins.bottom_mm));

    out.push_str("Page numbering\n");
    let enabled = if numbering.enabled { "yes" } else { "no" };
    line(&mut out, Attribute::PageNumbering, "Enabled", enabled.to_string());
    line(
        &mut out,
        Attribute::PageNumberPosition,
        "Position",
        numbering.position.to_string(),
    );
    line(&mut out, Attribute::PageNumberFontName, "Font", numbering.font_name.clone());
    line(
        &mut out,
        Attribute::PageNumberFontSizePt,
        "Font size",
        format!("{} pt", numbering.font_size_pt),
    );
    let first = if numbering.first_page_numbered { "yes" } else { "no" };
    out.push_str(&format!("{}First page numbered: {}\n", options.indent, first));

    if options.include_evidence && !model.evidence.is_empty() {
        out.push_str("Evidence\n");
        for (key, fragment) in &model.evidence {
            out.push_str(&format!("{}{}: \"{}\"\n", options.indent, key, fragment));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overridden() -> RequirementsModel {
        let mut model = RequirementsModel::default();
        model.document.font_name = "Arial".into();
        model
            .evidence
            .insert("font_name".into(), "шрифт основного текста Arial".into());
        model
    }

    #[test]
    fn test_to_text_defaults() {
        let text = to_text(&RequirementsModel::default());
        assert!(text.starts_with("Body text\n  Font: Times New Roman\n"));
        assert!(text.contains("  Line spacing: 1.5\n"));
        assert!(text.contains("  Paragraph indent: 1.25 cm\n"));
        assert!(text.contains("  Left: 30 mm\n"));
        assert!(text.contains("  Position: bottom_center\n"));
        assert!(text.ends_with("First page numbered: no"));
        assert!(!text.contains('*'));
        assert!(!text.contains("Evidence"));
    }

    #[test]
    fn test_to_text_marks_overrides() {
        let text = to_text(&overridden());
        assert!(text.contains("  Font: Arial *\n"));
        assert!(text.contains("  Font: Times New Roman\n"));
    }

    #[test]
    fn test_to_text_with_evidence() {
        let options = TextOptions::new().with_evidence(true).with_override_marks(false);
        let text = to_text_with_options(&overridden(), &options);
        assert!(text.contains("Evidence\n  font_name: \"шрифт основного текста Arial\""));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_to_text_custom_indent_on_every_line() {
        let options = TextOptions::new().with_evidence(true).with_indent("- ");
        let text = to_text_with_options(&overridden(), &options);
        assert!(text.contains("- Font: Arial *\n"));
        assert!(text.contains("- First page numbered: no\nEvidence\n"));
        assert!(text.ends_with("- font_name: \"шрифт основного текста Arial\""));
    }
}
