//! Length functions used to measure fragments and chunks.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How text is measured against `chunk_size` and `chunk_overlap`.
///
/// This is a plain value so a configuration can be shared freely across
/// threads. Use [`LengthFunction::Custom`] to plug a tokenizer-backed count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthFunction {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// UTF-8 bytes.
    Bytes,
    /// Extended grapheme clusters.
    Graphemes,
    /// Unicode words, a rough token estimate.
    Words,
    /// Caller-provided measurement. Not serializable.
    #[serde(skip)]
    Custom(fn(&str) -> usize),
}

impl LengthFunction {
    /// Measures `text`.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Bytes => text.len(),
            Self::Graphemes => text.graphemes(true).count(),
            Self::Words => text.unicode_words().count(),
            Self::Custom(f) => f(text),
        }
    }
}

/// The indivisible piece produced by the empty-string separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomicUnit {
    /// Single Unicode scalar values.
    #[default]
    Char,
    /// Extended grapheme clusters, so combining marks and emoji stay intact.
    Grapheme,
}

impl AtomicUnit {
    /// Explodes `text` into atomic units.
    #[must_use]
    pub fn explode(self, text: &str) -> Vec<&str> {
        match self {
            Self::Char => text
                .char_indices()
                .map(|(start, c)| &text[start..start + c.len_utf8()])
                .collect(),
            Self::Grapheme => text.graphemes(true).collect(),
        }
    }

    /// Returns `true` when `text` is exactly one atomic unit.
    #[must_use]
    pub fn is_atomic(self, text: &str) -> bool {
        match self {
            Self::Char => {
                let mut chars = text.chars();
                chars.next().is_some() && chars.next().is_none()
            }
            Self::Grapheme => {
                let mut graphemes = text.graphemes(true);
                graphemes.next().is_some() && graphemes.next().is_none()
            }
        }
    }
}
