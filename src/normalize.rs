//! Text normalization for stable keyword matching.
//!
//! Normalization is total and idempotent: any string is accepted and
//! normalizing already-normalized text returns it unchanged.

use unicode_normalization::UnicodeNormalization;

/// Options for text normalization.
///
/// The fixed steps (space folding, `ё` folding, whitespace collapsing,
/// trimming) always run; the flags below toggle the extra cleanup applied
/// to PDF-extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Compose Unicode to NFC before folding (so `е` + U+0308 folds like `ё`)
    pub unicode_nfc: bool,

    /// Expand Latin ligatures (ﬁ, ﬂ, etc.)
    pub fix_ligatures: bool,

    /// Remove soft hyphens and zero-width characters
    pub strip_invisible: bool,
}

impl NormalizeOptions {
    /// Create options with all cleanup enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the fixed steps, no extra cleanup.
    pub fn minimal() -> Self {
        Self {
            unicode_nfc: false,
            fix_ligatures: false,
            strip_invisible: false,
        }
    }

    /// Enable or disable NFC composition.
    pub fn with_unicode_nfc(mut self, enabled: bool) -> Self {
        self.unicode_nfc = enabled;
        self
    }

    /// Enable or disable ligature expansion.
    pub fn with_fix_ligatures(mut self, enabled: bool) -> Self {
        self.fix_ligatures = enabled;
        self
    }

    /// Enable or disable removal of invisible characters.
    pub fn with_strip_invisible(mut self, enabled: bool) -> Self {
        self.strip_invisible = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            unicode_nfc: true,
            fix_ligatures: true,
            strip_invisible: true,
        }
    }
}

const LIGATURES: [(char, &str); 7] = [
    ('\u{FB00}', "ff"),  // ﬀ
    ('\u{FB01}', "fi"),  // ﬁ
    ('\u{FB02}', "fl"),  // ﬂ
    ('\u{FB03}', "ffi"), // ﬃ
    ('\u{FB04}', "ffl"), // ﬄ
    ('\u{FB05}', "st"),  // ﬅ
    ('\u{FB06}', "st"),  // ﬆ
];

/// Text normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize raw text.
    pub fn process(&self, raw: &str) -> String {
        let composed: String = if self.options.unicode_nfc {
            raw.nfc().collect()
        } else {
            raw.to_string()
        };

        let mut out = String::with_capacity(composed.len());
        let mut pending_space = false;
        let mut chars = composed.chars().peekable();

        while let Some(c) = chars.next() {
            let c = match c {
                'ё' => 'е',
                'Ё' => 'Е',
                '\r' => {
                    // \r\n and lone \r both become one line break
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    '\n'
                }
                '\u{000C}' | '\u{000B}' | '\u{2028}' | '\u{2029}' | '\u{0085}' => '\n',
                other => other,
            };

            if self.options.strip_invisible && is_invisible(c) {
                continue;
            }

            // diaeresis left over from a decomposed ё
            if c == '\u{0308}'
                && !pending_space
                && matches!(out.chars().last(), Some('е' | 'Е'))
            {
                continue;
            }

            if c != '\n' && c.is_whitespace() {
                pending_space = true;
                continue;
            }

            if pending_space {
                out.push(' ');
                pending_space = false;
            }

            if self.options.fix_ligatures {
                if let Some((_, expanded)) = LIGATURES.iter().find(|(lig, _)| *lig == c) {
                    out.push_str(expanded);
                    continue;
                }
            }

            out.push(c);
        }

        if self.options.unicode_nfc {
            out = out.nfc().collect();
        }

        out.trim().to_string()
    }
}

/// Characters that render as nothing but break substring matches.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
    )
}

/// Normalize raw text with default options.
///
/// # Example
///
/// ```
/// use reqscan::normalize;
///
/// let text = normalize("  Шрифт\u{00A0}—\tTimes\n\nЁлка  ");
/// assert_eq!(text, "Шрифт — Times\n\nЕлка");
/// ```
pub fn normalize(raw: &str) -> String {
    Normalizer::default().process(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_breaking_space() {
        assert_eq!(normalize("14\u{00A0}пт"), "14 пт");
        assert_eq!(normalize("14\u{202F}пт"), "14 пт");
    }

    #[test]
    fn test_yo_folding() {
        assert_eq!(normalize("Учёт ЁМКОСТИ"), "Учет ЕМКОСТИ");
    }

    #[test]
    fn test_decomposed_yo_folds() {
        assert_eq!(normalize("уче\u{0308}т"), "учет");

        let minimal = Normalizer::new(NormalizeOptions::minimal());
        assert_eq!(minimal.process("уче\u{0308}т"), "учет");
    }

    #[test]
    fn test_nfc_composition() {
        assert_eq!(normalize("краи\u{0306}"), "край");

        let minimal = Normalizer::new(NormalizeOptions::minimal());
        assert_eq!(minimal.process("краи\u{0306}"), "краи\u{0306}");
    }

    #[test]
    fn test_collapses_horizontal_whitespace_keeps_newlines() {
        assert_eq!(normalize("a  \t b\n\nc   d"), "a b\n\nc d");
    }

    #[test]
    fn test_crlf_and_form_feed() {
        assert_eq!(normalize("one\r\ntwo\rthree\u{000C}four"), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn test_trim_whole_text() {
        assert_eq!(normalize("\n\n  текст  \n"), "текст");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn test_ligatures_and_invisible() {
        assert_eq!(normalize("ﬁnal"), "final");
        assert_eq!(normalize("меж\u{00AD}строчный"), "межстрочный");

        let minimal = Normalizer::new(NormalizeOptions::minimal());
        assert_eq!(minimal.process("ﬁnal"), "ﬁnal");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  Шрифт\u{00A0}—\tTimes New Roman\r\n\r\nКегль  14 ",
            "ё\u{0308} Ё \u{00AD}x\u{200B}y",
            "a \n b \n\n\t c",
            "",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_options_builder() {
        let options = NormalizeOptions::new()
            .with_unicode_nfc(false)
            .with_fix_ligatures(false);
        assert!(!options.unicode_nfc);
        assert!(!options.fix_ligatures);
        assert!(options.strip_invisible);
    }
}
