//! Segmentation granularity

use std::fmt;

/// The unit a segmenter splits text into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    /// Extended grapheme clusters (user-perceived characters)
    Grapheme,
    /// Word bounds, including runs of whitespace and punctuation
    #[default]
    Word,
    /// Sentence bounds
    Sentence,
}

impl Granularity {
    /// All granularities, in increasing segment size
    pub const ALL: [Granularity; 3] = [
        Granularity::Grapheme,
        Granularity::Word,
        Granularity::Sentence,
    ];

    /// Get the granularity name
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Grapheme => "grapheme",
            Granularity::Word => "word",
            Granularity::Sentence => "sentence",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
