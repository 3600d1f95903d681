//! Fragments: the atomic units attribute patterns are matched against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-empty piece of normalized source text.
///
/// The lowercased form is computed once so context predicates and scorers
/// can run against it repeatedly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Fragment {
    text: String,
    lower: String,
}

impl Fragment {
    /// Create a fragment from text, trimming surrounding whitespace.
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let text = text.trim().to_string();
        let lower = text.to_lowercase();
        Self { text, lower }
    }

    /// The original text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The lowercased text.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Whether the lowercased text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Whether the lowercased text contains any of `needles`.
    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }

    /// Whether the lowercased text contains all of `needles`.
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.lower.contains(n))
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the fragment holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.text
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
