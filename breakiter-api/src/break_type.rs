//! Break classification

use std::fmt;

/// Classification of the break at the cursor
///
/// The legacy API documents six categories. Only [`BreakType::None`] is
/// ever reported; no classification is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakType {
    /// Not classified
    #[default]
    None,
    /// Break after a run of digits
    Number,
    /// Break after a run of letters
    Letter,
    /// Break after a run of kana
    Kana,
    /// Break after a run of ideographs
    Ideo,
    /// Break after anything else
    Unknown,
}

impl BreakType {
    /// Get the legacy string form
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakType::None => "none",
            BreakType::Number => "number",
            BreakType::Letter => "letter",
            BreakType::Kana => "kana",
            BreakType::Ideo => "ideo",
            BreakType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for BreakType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(BreakType::default(), BreakType::None);
        assert_eq!(BreakType::default().to_string(), "none");
    }

    #[test]
    fn test_compares_with_legacy_strings() {
        assert_eq!(BreakType::None, "none");
        assert_ne!(BreakType::Kana, "none");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BreakType::Ideo).unwrap(), "\"ideo\"");
    }
}
