//! Rendering options and configuration.

/// Options for text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Append the evidence section
    pub include_evidence: bool,

    /// Mark attributes that differ from their defaults with `*`
    pub mark_overrides: bool,

    /// Indentation used for attribute lines
    pub indent: String,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the evidence section.
    pub fn with_evidence(mut self, include: bool) -> Self {
        self.include_evidence = include;
        self
    }

    /// Enable or disable override markers.
    pub fn with_override_marks(mut self, mark: bool) -> Self {
        self.mark_overrides = mark;
        self
    }

    /// Set the indentation string.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            include_evidence: false,
            mark_overrides: true,
            indent: "  ".to_string(),
        }
    }
}
