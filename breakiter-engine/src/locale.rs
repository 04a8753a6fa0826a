//! Locale requests forwarded to a segmenter
//!
//! A [`LocaleList`] is kept exactly as the caller supplied it. Tags are
//! only checked for well-formedness, and only when a segmenter asks for
//! it, so construction of an iterator never fails on locale content.

use crate::error::{Result, SegmentError};
use std::fmt;

/// Locale reported when the caller requested none
pub const UNDETERMINED: &str = "und";

/// Ordered list of requested locale tags, most preferred first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocaleList {
    tags: Vec<String>,
}

impl LocaleList {
    /// Create an empty request (the segmenter's default locale)
    pub fn new() -> Self {
        Self::default()
    }

    /// The most preferred tag, if any
    pub fn primary(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// The most preferred tag, or `und` when the list is empty
    pub fn primary_or_und(&self) -> &str {
        self.primary().unwrap_or(UNDETERMINED)
    }

    /// Iterate over the tags in preference order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of requested tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag was requested
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Check that every tag is well formed
    ///
    /// Fails on the first malformed tag, carrying it verbatim.
    pub fn validate(&self) -> Result<()> {
        match self.tags.iter().find(|tag| !is_well_formed(tag)) {
            Some(tag) => Err(SegmentError::MalformedLocale { tag: tag.clone() }),
            None => Ok(()),
        }
    }
}

/// Lenient BCP 47 shape check.
///
/// Subtags are separated by `-` or `_` and hold 1 to 8 ASCII
/// alphanumerics. The leading subtag is a language of 2-3 or 5-8 ASCII
/// letters, `root`, or one of the singletons `x` (private use) and `i`
/// (grandfathered), which must be followed by at least one subtag.
pub fn is_well_formed(tag: &str) -> bool {
    let mut subtags = tag.split(['-', '_']).peekable();

    let leading_ok = match subtags.next() {
        Some(s) if s.eq_ignore_ascii_case("x") || s.eq_ignore_ascii_case("i") => {
            subtags.peek().is_some()
        }
        Some(s) => is_language(s),
        None => false,
    };

    leading_ok && subtags.all(is_subtag)
}

fn is_language(subtag: &str) -> bool {
    let len_ok = matches!(subtag.len(), 2..=3 | 5..=8) || subtag.eq_ignore_ascii_case("root");
    len_ok && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_subtag(subtag: &str) -> bool {
    (1..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for LocaleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            return f.write_str(UNDETERMINED);
        }
        f.write_str(&self.tags.join(","))
    }
}

impl From<&str> for LocaleList {
    fn from(tag: &str) -> Self {
        Self {
            tags: vec![tag.to_string()],
        }
    }
}

impl From<String> for LocaleList {
    fn from(tag: String) -> Self {
        Self { tags: vec![tag] }
    }
}

impl From<Vec<String>> for LocaleList {
    fn from(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl From<Vec<&str>> for LocaleList {
    fn from(tags: Vec<&str>) -> Self {
        Self::from(tags.as_slice())
    }
}

impl From<&[&str]> for LocaleList {
    fn from(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for LocaleList {
    fn from(tags: [&str; N]) -> Self {
        Self::from(tags.as_slice())
    }
}

impl<T: Into<LocaleList>> From<Option<T>> for LocaleList {
    fn from(locales: Option<T>) -> Self {
        locales.map(Into::into).unwrap_or_default()
    }
}

impl FromIterator<String> for LocaleList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}
