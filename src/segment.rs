//! Fragment segmentation.
//!
//! Regulatory text mixes sentence prose with list and table layouts, and
//! PDF extraction adds line breaks in arbitrary places. Segmentation is a
//! coarse per-line multi-delimiter split rather than sentence tokenization:
//!
//! 1. split into lines, dropping blank lines and table-of-contents dot leaders;
//! 2. split each line on `.`, `;`, `:` followed by whitespace and on
//!    spaced dashes used as clause separators;
//! 3. trim, dropping empty and overlong pieces;
//! 4. deduplicate case-insensitively, keeping first-seen order.

use crate::error::{Error, Result};
use crate::model::Fragment;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static CLAUSE_WITH_DASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.;:]\s+| — | – | - ").unwrap());
static CLAUSE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.;:]\s+").unwrap());

/// Options for fragment segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Pieces longer than this many characters are discarded
    pub max_fragment_chars: usize,

    /// A line containing this many consecutive periods is a dot leader
    pub min_dot_leader: usize,

    /// Split on spaced em/en dashes and hyphens
    pub split_on_dashes: bool,
}

impl SegmentOptions {
    /// Create segmentation options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum fragment length in characters.
    pub fn with_max_fragment_chars(mut self, chars: usize) -> Self {
        self.max_fragment_chars = chars;
        self
    }

    /// Set the dot-leader run length.
    pub fn with_min_dot_leader(mut self, dots: usize) -> Self {
        self.min_dot_leader = dots;
        self
    }

    /// Enable or disable dash splitting.
    pub fn with_dash_split(mut self, split: bool) -> Self {
        self.split_on_dashes = split;
        self
    }

    /// Check that the options describe a usable segmenter.
    pub fn validate(&self) -> Result<()> {
        if self.max_fragment_chars == 0 {
            return Err(Error::InvalidOptions(
                "max_fragment_chars must be positive".into(),
            ));
        }
        if self.min_dot_leader < 2 {
            return Err(Error::InvalidOptions(
                "min_dot_leader must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            max_fragment_chars: 400,
            min_dot_leader: 8,
            split_on_dashes: true,
        }
    }
}

/// Splits normalized text into fragments.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with the given options.
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment normalized text into deduplicated fragments.
    pub fn segment(&self, text: &str) -> Vec<Fragment> {
        let splitter: &Regex = if self.options.split_on_dashes {
            &CLAUSE_WITH_DASHES
        } else {
            &CLAUSE_PUNCTUATION
        };

        let mut seen = HashSet::new();
        let mut fragments = Vec::new();
        let mut dropped_long = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || self.is_dot_leader(line) {
                continue;
            }

            for piece in splitter.split(line) {
                let piece = piece.trim();
                if piece.is_empty() {
                    continue;
                }
                if piece.chars().count() > self.options.max_fragment_chars {
                    dropped_long += 1;
                    continue;
                }

                let fragment = Fragment::new(piece);
                if seen.insert(fragment.lower().to_string()) {
                    fragments.push(fragment);
                }
            }
        }

        if dropped_long > 0 {
            log::debug!(
                "Segmenter: dropped {} pieces longer than {} chars",
                dropped_long,
                self.options.max_fragment_chars
            );
        }
        log::debug!("Segmenter: produced {} fragments", fragments.len());

        fragments
    }

    fn is_dot_leader(&self, line: &str) -> bool {
        let mut run = 0usize;
        for c in line.chars() {
            match c {
                '.' => run += 1,
                '…' => run += 3,
                _ => run = 0,
            }
            if run >= self.options.min_dot_leader {
                return true;
            }
        }
        false
    }
}

/// Segment normalized text with default options.
///
/// # Example
///
/// ```
/// use reqscan::segment;
///
/// let fragments = segment("Шрифт Arial; кегль 12. Поля: 20 мм");
/// let texts: Vec<&str> = fragments.iter().map(|f| f.as_str()).collect();
/// assert_eq!(texts, vec!["Шрифт Arial", "кегль 12", "Поля", "20 мм"]);
/// ```
pub fn segment(text: &str) -> Vec<Fragment> {
    Segmenter::default().segment(text)
}
