//! UAX #29 segmenter built on `unicode-segmentation`

use crate::{
    error::Result,
    granularity::Granularity,
    locale::LocaleList,
    segmenter::{Segment, Segmenter, Segments},
};
use unicode_segmentation::UnicodeSegmentation;

/// Default segmenter using the Unicode text segmentation algorithm
///
/// UAX #29 rules are locale independent, so the locale request is only
/// checked for well-formedness. It is validated lazily on every
/// [`Segmenter::segment`] call.
#[derive(Debug, Clone)]
pub struct UnicodeSegmenter {
    locales: LocaleList,
    granularity: Granularity,
}

impl UnicodeSegmenter {
    /// Create a segmenter bound to a locale request and granularity
    pub fn new<L: Into<LocaleList>>(locales: L, granularity: Granularity) -> Self {
        Self {
            locales: locales.into(),
            granularity,
        }
    }
}

impl Segmenter for UnicodeSegmenter {
    fn granularity(&self) -> Granularity {
        self.granularity
    }

    fn locales(&self) -> &LocaleList {
        &self.locales
    }

    fn segment<'t>(&self, text: &'t str) -> Result<Segments<'t>> {
        self.locales.validate()?;

        log::trace!(
            "segmenting {} bytes at {} granularity",
            text.len(),
            self.granularity
        );

        let segments: Segments<'t> = match self.granularity {
            Granularity::Grapheme => Box::new(text.grapheme_indices(true).map(segment_at)),
            Granularity::Word => Box::new(text.split_word_bound_indices().map(segment_at)),
            Granularity::Sentence => {
                Box::new(text.split_sentence_bound_indices().map(segment_at))
            }
        };

        Ok(segments)
    }
}

fn segment_at((index, piece): (usize, &str)) -> Result<Segment> {
    Ok(Segment::new(index, piece.len()))
}
