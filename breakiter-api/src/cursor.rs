//! Stateful break iterator
//!
//! A [`BreakIterator`] holds the adopted text, every segment start in it,
//! and a cursor into that list. The cursor is either unset or points at
//! one of the `len() + 1` boundaries, the last of which is the end of the
//! text and is never produced by the segmenter.
//!
//! ```text
//!  adopt_text        first / next          next              next
//! ----------> Unset -------------> At(i) ---------> At(len) ---------> At(len)
//!                                  i < len          sentinel          returns DONE
//! ```

use crate::{
    break_type::BreakType,
    config::{BreakIteratorOptions, ResolvedOptions},
    error::Result,
    factory,
};
use breakiter_engine::{Granularity, LocaleList, Segment, SegmentAssembler, Segmenter};

/// Returned by navigation methods when there is no boundary to report
pub const DONE: isize = -1;

/// Cursor position within the boundary list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Position {
    /// No boundary selected since the last adoption
    #[default]
    Unset,
    /// Index into the segments; `segments.len()` is the end sentinel
    At(usize),
}

#[derive(Debug, Default)]
struct CursorState {
    text: String,
    segments: Vec<Segment>,
    position: Position,
}

/// Imperative first/next/current cursor over text boundaries
///
/// Offsets are byte offsets into the adopted text. Every instance owns its
/// state; two iterators never observe each other.
#[derive(Debug)]
pub struct BreakIterator {
    segmenter: Box<dyn Segmenter>,
    assembler: SegmentAssembler,
    state: CursorState,
}

impl BreakIterator {
    /// Create an iterator with the built-in segmenter
    ///
    /// Shorthand for [`factory::create`].
    pub fn new<L: Into<LocaleList>>(locales: L, options: BreakIteratorOptions) -> Result<Self> {
        factory::create(locales, options)
    }

    /// Create an iterator driven by the given segmenter
    pub(crate) fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            segmenter,
            assembler: SegmentAssembler::new(),
            state: CursorState::default(),
        }
    }

    /// Assign the text to iterate over
    ///
    /// Runs the segmenter once over the whole text and resets the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Segmentation`] when the segmenter fails or
    /// emits an invalid boundary. The iterator then keeps its previous
    /// text, boundaries and position.
    pub fn adopt_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();

        let segments = match self.assembler.segment_text(self.segmenter.as_ref(), &text) {
            Ok(segments) => segments,
            Err(e) => {
                log::warn!("keeping previous text, segmentation failed: {e}");
                return Err(e.into());
            }
        };

        log::debug!(
            "adopted {} bytes as {} {} segments",
            text.len(),
            segments.len(),
            self.segmenter.granularity()
        );

        self.state = CursorState {
            text,
            segments,
            position: Position::Unset,
        };
        Ok(())
    }

    /// Move to the first boundary and return it
    ///
    /// For an empty text this is the end sentinel, `0`.
    pub fn first(&mut self) -> isize {
        self.state.position = Position::At(0);
        self.current()
    }

    /// Move to the next boundary and return it
    ///
    /// Returns [`DONE`] without moving once the end sentinel was reached.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> isize {
        let len = self.state.segments.len();
        let next = match self.state.position {
            Position::Unset => 0,
            Position::At(i) if i < len => i + 1,
            Position::At(_) => return DONE,
        };

        self.state.position = Position::At(next);
        log::trace!("next -> position {next}");
        self.current()
    }

    /// The boundary at the cursor, or [`DONE`] when unset
    pub fn current(&self) -> isize {
        self.current_boundary().map_or(DONE, to_isize)
    }

    /// The boundary at the cursor as a byte offset
    pub fn current_boundary(&self) -> Option<usize> {
        match self.state.position {
            Position::Unset => None,
            Position::At(i) => match self.state.segments.get(i) {
                Some(segment) => Some(segment.index),
                None => Some(self.state.text.len()),
            },
        }
    }

    /// Classification of the break at the cursor
    ///
    /// Always [`BreakType::None`].
    pub fn break_type(&self) -> BreakType {
        BreakType::None
    }

    /// Cursor index in `[-1, len()]`; `-1` when unset
    pub fn position(&self) -> isize {
        match self.state.position {
            Position::Unset => DONE,
            Position::At(i) => to_isize(i),
        }
    }

    /// The adopted text
    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// Segments of the adopted text
    pub fn segments(&self) -> &[Segment] {
        &self.state.segments
    }

    /// Number of segments in the adopted text
    pub fn len(&self) -> usize {
        self.state.segments.len()
    }

    /// Whether the adopted text has no segments
    pub fn is_empty(&self) -> bool {
        self.state.segments.is_empty()
    }

    /// Text of the `index`-th segment
    pub fn segment_text(&self, index: usize) -> Option<&str> {
        self.state.segments.get(index)?.as_str(&self.state.text)
    }

    /// Text of the segment starting at the cursor
    ///
    /// `None` when unset or at the end sentinel.
    pub fn current_segment(&self) -> Option<&str> {
        match self.state.position {
            Position::At(i) => self.segment_text(i),
            Position::Unset => None,
        }
    }

    /// Every boundary, including the end of text, without moving the cursor
    ///
    /// Yields nothing but `0` for an empty text.
    pub fn boundaries(&self) -> impl Iterator<Item = usize> + '_ {
        self.state
            .segments
            .iter()
            .map(|segment| segment.index)
            .chain(std::iter::once(self.state.text.len()))
    }

    /// Granularity this iterator was built for
    pub fn granularity(&self) -> Granularity {
        self.segmenter.granularity()
    }

    /// Locale and `type` this iterator runs with
    pub fn resolved_options(&self) -> ResolvedOptions {
        ResolvedOptions::new(
            self.segmenter.locales().primary_or_und(),
            self.segmenter.granularity(),
        )
    }
}

// Strings never exceed `isize::MAX` bytes, so offsets always fit.
fn to_isize(offset: usize) -> isize {
    isize::try_from(offset).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn characters() -> BreakIterator {
        BreakIterator::new("en", BreakIteratorOptions::character()).unwrap()
    }

    #[test]
    fn test_current_before_navigation() {
        let mut iter = characters();
        assert_eq!(iter.current(), DONE);
        assert_eq!(iter.position(), -1);

        iter.adopt_text("abc").unwrap();
        assert_eq!(iter.current(), DONE);
        assert_eq!(iter.current_boundary(), None);
    }

    #[test]
    fn test_two_characters() {
        let mut iter = characters();
        iter.adopt_text("ab").unwrap();

        assert_eq!(iter.first(), 0);
        assert_eq!(iter.next(), 1);
        assert_eq!(iter.next(), 2);
        assert_eq!(iter.next(), DONE);
        assert_eq!(iter.next(), DONE);
        assert_eq!(iter.current(), 2);
        assert_eq!(iter.position(), 2);
    }

    #[test]
    fn test_next_from_unset_lands_on_first() {
        let mut iter = characters();
        iter.adopt_text("xy").unwrap();
        assert_eq!(iter.next(), 0);
        assert_eq!(iter.position(), 0);
    }

    #[test]
    fn test_empty_text() {
        let mut iter = characters();
        iter.adopt_text("").unwrap();

        assert!(iter.is_empty());
        assert_eq!(iter.first(), 0);
        assert_eq!(iter.current(), 0);
        assert_eq!(iter.next(), DONE);
        assert_eq!(iter.boundaries().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_first_rewinds() {
        let mut iter = characters();
        iter.adopt_text("abc").unwrap();
        while iter.next() != DONE {}

        assert_eq!(iter.first(), 0);
        assert_eq!(iter.next(), 1);
    }

    #[test]
    fn test_current_segment() {
        let mut iter = BreakIterator::new("en", BreakIteratorOptions::word()).unwrap();
        iter.adopt_text("hi there").unwrap();

        assert_eq!(iter.current_segment(), None);
        iter.first();
        assert_eq!(iter.current_segment(), Some("hi"));
        iter.next();
        assert_eq!(iter.current_segment(), Some(" "));
        iter.next();
        assert_eq!(iter.current_segment(), Some("there"));
        iter.next();
        assert_eq!(iter.current_segment(), None);
    }

    #[test]
    fn test_boundaries_do_not_move_cursor() {
        let mut iter = characters();
        iter.adopt_text("héj").unwrap();
        iter.first();

        assert_eq!(iter.boundaries().collect::<Vec<_>>(), vec![0, 1, 3, 4]);
        assert_eq!(iter.current(), 0);
    }

    #[test]
    fn test_break_type_is_none() {
        let mut iter = characters();
        assert_eq!(iter.break_type(), BreakType::None);
        iter.adopt_text("12 かな 漢字").unwrap();
        while iter.next() != DONE {
            assert_eq!(iter.break_type().as_str(), "none");
        }
    }

    #[test]
    fn test_resolved_options() {
        let iter = BreakIterator::new(["de-CH", "de"], BreakIteratorOptions::sentence()).unwrap();
        let resolved = iter.resolved_options();
        assert_eq!(resolved.locale, "de-CH");
        assert_eq!(resolved.kind, "sentence");

        let iter = BreakIterator::new(LocaleList::new(), BreakIteratorOptions::default()).unwrap();
        let resolved = iter.resolved_options();
        assert_eq!(resolved.locale, "und");
        assert_eq!(resolved.kind, "word");
    }
}
