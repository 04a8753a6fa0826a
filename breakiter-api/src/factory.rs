//! Break iterator construction
//!
//! Validates options once and binds a fresh iterator to a segmenter. No
//! state is shared between the iterators built here.

use crate::{
    config::BreakIteratorOptions,
    cursor::BreakIterator,
    error::{Error, Result},
};
use breakiter_engine::{LocaleList, Segmenter, UnicodeSegmenter};

/// Create a break iterator using the built-in Unicode segmenter
///
/// `locales` is forwarded to the segmenter untouched. `None` requests the
/// segmenter's default locale.
///
/// # Errors
///
/// Returns [`Error::UnsupportedGranularity`] when `options.kind` is not
/// one of `character`, `word` or `sentence`.
pub fn create<L: Into<LocaleList>>(
    locales: L,
    options: BreakIteratorOptions,
) -> Result<BreakIterator> {
    let granularity = options.granularity()?;
    let locales = locales.into();

    log::debug!("creating {granularity} break iterator for locales {locales}");

    let segmenter = UnicodeSegmenter::new(locales, granularity);
    Ok(BreakIterator::with_segmenter(Box::new(segmenter)))
}

/// Builder for BreakIterator
///
/// Provides a fluent interface for configuring the iterator.
#[derive(Debug, Default)]
pub struct BreakIteratorBuilder {
    locales: LocaleList,
    options: BreakIteratorOptions,
    segmenter: Option<Box<dyn Segmenter>>,
}

impl BreakIteratorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single locale
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        let tag: String = tag.into();
        self.locales = LocaleList::from(tag);
        self
    }

    /// Request locales in preference order
    pub fn locales<L: Into<LocaleList>>(mut self, locales: L) -> Self {
        self.locales = locales.into();
        self
    }

    /// Set the `type` label
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.options.kind = Some(kind.into());
        self
    }

    /// Replace the whole options bag
    pub fn options(mut self, options: BreakIteratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a custom segmenter instead of the built-in one
    ///
    /// The segmenter's own locales are used; any locales given to the
    /// builder are ignored.
    pub fn segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Build the iterator
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedGranularity`] for an unknown `type`, or
    /// [`Error::Config`] when a custom segmenter works at a different
    /// granularity than `type` asks for.
    pub fn build(self) -> Result<BreakIterator> {
        let Some(segmenter) = self.segmenter else {
            return create(self.locales, self.options);
        };

        let granularity = self.options.granularity()?;
        if segmenter.granularity() != granularity {
            return Err(Error::Config(format!(
                "segmenter splits at {} but type asks for {}",
                segmenter.granularity(),
                granularity
            )));
        }

        log::debug!(
            "creating {granularity} break iterator with custom segmenter for locales {}",
            segmenter.locales()
        );

        Ok(BreakIterator::with_segmenter(segmenter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakiter_engine::Granularity;

    #[test]
    fn test_create_every_type() {
        for kind in ["character", "word", "sentence"] {
            let iter = create("en", BreakIteratorOptions::with_type(kind)).unwrap();
            assert_eq!(iter.resolved_options().kind, kind);
        }
    }

    #[test]
    fn test_create_rejects_paragraph() {
        let err = create("en", BreakIteratorOptions::with_type("paragraph")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedGranularity(ref v) if v == "paragraph"));
    }

    #[test]
    fn test_create_without_locales() {
        let mut iter = create(None::<&str>, BreakIteratorOptions::default()).unwrap();
        assert_eq!(iter.resolved_options().locale, "und");
        assert_eq!(iter.granularity(), Granularity::Word);

        iter.adopt_text("a b").unwrap();
        assert_eq!(iter.first(), 0);
    }

    #[test]
    fn test_create_with_some_locale() {
        let iter = create(Some("ko"), BreakIteratorOptions::sentence()).unwrap();
        assert_eq!(iter.resolved_options().locale, "ko");
    }

    #[test]
    fn test_builder_defaults() {
        let iter = BreakIteratorBuilder::new().build().unwrap();
        assert_eq!(iter.granularity(), Granularity::Word);
        assert_eq!(iter.resolved_options().locale, "und");
    }

    #[test]
    fn test_builder_fluent() {
        let iter = BreakIteratorBuilder::new()
            .locale("th")
            .kind("sentence")
            .build()
            .unwrap();
        assert_eq!(iter.granularity(), Granularity::Sentence);
        assert_eq!(iter.resolved_options().locale, "th");
    }

    #[test]
    fn test_builder_rejects_mismatched_segmenter() {
        let err = BreakIteratorBuilder::new()
            .kind("character")
            .segmenter(Box::new(UnicodeSegmenter::new("en", Granularity::Word)))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builder_accepts_matching_segmenter() {
        let iter = BreakIteratorBuilder::new()
            .kind("word")
            .segmenter(Box::new(UnicodeSegmenter::new("fi", Granularity::Word)))
            .build()
            .unwrap();
        assert_eq!(iter.resolved_options().locale, "fi");
    }
}
