//! End-to-end extraction tests.

use reqscan::extract::attributes;
use reqscan::render::{model_from_json, to_json, to_text};
use reqscan::{
    extract_requirements, extract_requirements_with_options, normalize, segment, Attribute,
    ExtractOptions, Fragment, JsonFormat, PageMargins, PageNumberPosition, RequirementsModel,
    SegmentOptions,
};

const GUIDELINES: &str = "Текст набирается шрифтом Arial, кегль 12.
Межстрочный интервал 1,15.
Абзацный отступ 1 см.
Левое поле 25 мм, правое поле 10 мм.
Верхнее поле 15 мм, нижнее поле 25 мм.
Номер страницы ставится вверху по центру.";

#[test]
fn test_reference_sentence() {
    let model = extract_requirements(
        "Основной шрифт — Times New Roman, размер 14, межстрочный интервал 1.5, \
         левое поле 30 мм, правое поле 15 мм, верхнее поле 20 мм, нижнее поле 20 мм, \
         нумерация страниц внизу по центру",
    )
    .unwrap();

    assert_eq!(model.document.font_name, "Times New Roman");
    assert_eq!(model.document.font_size_pt, 14);
    assert_eq!(model.document.line_spacing, 1.5);
    assert_eq!(
        model.margins,
        PageMargins {
            left_mm: 30,
            right_mm: 15,
            top_mm: 20,
            bottom_mm: 20
        }
    );
    assert!(model.page_numbering.enabled);
    assert_eq!(model.page_numbering.position, PageNumberPosition::BottomCenter);
}

const REFERENCE_NON_DEFAULT: &str = "Основной шрифт — Arial, размер 12, межстрочный интервал 2, \
     левое поле 25 мм, правое поле 10 мм, верхнее поле 15 мм, нижнее поле 25 мм, \
     нумерация страниц внизу справа";

#[test]
fn test_reference_sentence_with_overrides() {
    let model = extract_requirements(REFERENCE_NON_DEFAULT).unwrap();

    assert_eq!(model.document.line_spacing, 2.0);
    assert_eq!(
        model.margins,
        PageMargins {
            left_mm: 25,
            right_mm: 10,
            top_mm: 15,
            bottom_mm: 25
        }
    );
    assert_eq!(model.page_numbering.position, PageNumberPosition::BottomRight);
    // The family is named in the body clause, not in the numbering clause.
    assert_eq!(model.page_numbering.font_name, "Times New Roman");
    assert!(model.evidence_for("page_number_font_name").is_none());
}

#[test]
fn test_reference_sentence_with_overrides_unsplit() {
    let options =
        ExtractOptions::new().with_segment(SegmentOptions::new().with_dash_split(false));
    let model = extract_requirements_with_options(REFERENCE_NON_DEFAULT, &options).unwrap();

    assert_eq!(model.document.font_name, "Arial");
    assert_eq!(model.document.font_size_pt, 12);
    assert_eq!(model.document.line_spacing, 2.0);
    assert_eq!(model.page_numbering.position, PageNumberPosition::BottomRight);
    assert_eq!(model.page_numbering.font_name, "Times New Roman");
    assert!(model.evidence_for("font_name").is_some());
    assert!(model.evidence_for("page_number_font_name").is_none());
}

#[test]
fn test_font_size_after_other_numbers() {
    let model =
        extract_requirements("Шрифт основного текста Arial, межстрочный интервал 1,5, кегль 12")
            .unwrap();
    assert_eq!(model.document.font_size_pt, 12);
    assert_eq!(model.document.font_name, "Arial");
    assert!(model.evidence_for("font_size_pt").is_some());
}

#[test]
fn test_footnote_and_chapter_fonts_keep_default() {
    let options =
        ExtractOptions::new().with_segment(SegmentOptions::new().with_dash_split(false));
    for text in ["Шрифт сносок — Arial", "Глава 2. Главы набираются шрифтом Arial"] {
        let model = extract_requirements_with_options(text, &options).unwrap();
        assert_eq!(model.document.font_name, "Times New Roman", "input: {:?}", text);
        assert!(model.evidence_for("font_name").is_none());
    }
}

#[test]
fn test_figure_numbers_do_not_move_page_numbers() {
    let model = extract_requirements("Номера рисунков ставятся внизу справа").unwrap();
    assert_eq!(model.page_numbering.position, PageNumberPosition::BottomCenter);
    assert!(model.evidence_for("page_number_position").is_none());
}

#[test]
fn test_guidelines_override_defaults() {
    let model = extract_requirements(GUIDELINES).unwrap();

    assert_eq!(model.document.font_name, "Arial");
    assert_eq!(model.document.font_size_pt, 12);
    assert_eq!(model.document.line_spacing, 1.15);
    assert_eq!(model.document.paragraph_indent_cm, 1.0);
    assert_eq!(
        model.margins,
        PageMargins {
            left_mm: 25,
            right_mm: 10,
            top_mm: 15,
            bottom_mm: 25
        }
    );
    assert_eq!(model.page_numbering.position, PageNumberPosition::TopCenter);
    assert!(model.page_numbering.enabled);
    assert!(!model.page_numbering.first_page_numbered);
}

#[test]
fn test_evidence_only_for_overridden_attributes() {
    let model = extract_requirements(GUIDELINES).unwrap();

    let keys: Vec<&str> = model.evidence.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "font_name",
            "font_size_pt",
            "line_spacing",
            "margin_bottom_mm",
            "margin_left_mm",
            "margin_right_mm",
            "margin_top_mm",
            "page_number_position",
            "paragraph_indent_cm",
        ]
    );
    for key in model.evidence.keys() {
        assert!(Attribute::from_key(key).is_some(), "unknown evidence key {}", key);
    }
    assert!(model
        .evidence_for("margin_left_mm")
        .unwrap()
        .contains("25 мм"));
    assert!(model.evidence_for("page_numbering").is_none());
}

#[test]
fn test_default_values_found_in_text_leave_no_evidence() {
    let model =
        extract_requirements("Шрифт основного текста Times New Roman, кегль 14").unwrap();
    assert_eq!(model, RequirementsModel::default());
    assert!(model.is_all_defaults());
}

#[test]
fn test_footnote_font_loses_in_either_order() {
    let footnote = Fragment::new("шрифт сносок — Arial");
    let main = Fragment::new("шрифт основного текста — Times New Roman");

    for fragments in [
        vec![footnote.clone(), main.clone()],
        vec![main.clone(), footnote.clone()],
    ] {
        let found = attributes::body_font_name(&fragments).unwrap();
        assert_eq!(found.value.name(), "Times New Roman");
        assert_eq!(found.fragment, &main);
    }
}

#[test]
fn test_main_text_font_wins_through_pipeline() {
    let options =
        ExtractOptions::new().with_segment(SegmentOptions::new().with_dash_split(false));
    let texts = [
        "Шрифт основного текста — Calibri\nШрифт сносок — Arial",
        "Шрифт сносок — Arial\nШрифт основного текста — Calibri",
    ];
    for text in texts {
        let model = extract_requirements_with_options(text, &options).unwrap();
        assert_eq!(model.document.font_name, "Calibri");
        assert!(model.evidence_for("font_name").unwrap().contains("основного"));
    }
}

#[test]
fn test_text_without_requirements_gives_defaults() {
    for text in ["", "Введение. Цель работы", "Глава 1. Общие положения"] {
        let model = extract_requirements(text).unwrap();
        assert_eq!(model, RequirementsModel::default(), "input: {:?}", text);
        assert!(model.evidence.is_empty());
    }
}

#[test]
fn test_out_of_range_values_are_ignored() {
    let model = extract_requirements(
        "Межстрочный интервал 5\nКегль основного текста 40\nОтступ первой строки 5 см",
    )
    .unwrap();
    assert_eq!(model.document.line_spacing, 1.5);
    assert_eq!(model.document.font_size_pt, 14);
    assert_eq!(model.document.paragraph_indent_cm, 1.25);
    assert!(model.is_all_defaults());
}

#[test]
fn test_heading_rules_do_not_leak_into_body() {
    let model = extract_requirements(
        "Заголовки набираются шрифтом Arial, кегль 16\nМежстрочный интервал заголовков 1",
    )
    .unwrap();
    assert_eq!(model.document.font_name, "Times New Roman");
    assert_eq!(model.document.font_size_pt, 14);
    assert_eq!(model.document.line_spacing, 1.5);
}

#[test]
fn test_evidence_is_clipped() {
    let options = ExtractOptions::new().with_evidence_clip(20);
    let model = extract_requirements_with_options(
        "Левое поле страницы должно составлять не менее 25 мм для подшивки",
        &options,
    )
    .unwrap();
    assert_eq!(model.margins.left_mm, 25);
    let evidence = model.evidence_for("margin_left_mm").unwrap();
    assert!(evidence.ends_with('…'));
    assert!(evidence.chars().count() <= 21);
}

#[test]
fn test_normalize_is_idempotent() {
    let raw = "  Шрифт\u{00A0}\u{00A0}Times New Roman;\r\nЁмкость\u{200B} текста\t\t14  ";
    let once = normalize(raw);
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_segment_is_idempotent() {
    let text = normalize(GUIDELINES);
    let first = segment(&text);
    let joined: Vec<&str> = first.iter().map(|f| f.as_str()).collect();
    let second = segment(&joined.join("\n"));
    assert_eq!(first, second);
}

#[test]
fn test_json_round_trip_keeps_evidence() {
    let model = extract_requirements(GUIDELINES).unwrap();
    let json = to_json(&model, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"position\":\"top_center\""));
    assert_eq!(model_from_json(&json).unwrap(), model);
}

#[test]
fn test_text_summary_marks_overrides() {
    let model = extract_requirements(GUIDELINES).unwrap();
    let text = to_text(&model);
    assert!(text.contains("  Font: Arial *\n"));
    assert!(text.contains("  Left: 25 mm *\n"));
    assert!(text.contains("  Enabled: yes\n"));
}
