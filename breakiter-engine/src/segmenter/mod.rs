//! Segmenter interface consumed by break iterators

use crate::{error::Result, granularity::Granularity, locale::LocaleList};
use std::fmt;

pub mod unicode;

pub use unicode::UnicodeSegmenter;

/// A segment of text, identified by where it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Byte offset of the segment start in the segmented text
    pub index: usize,
    /// Byte length of the segment
    pub len: usize,
}

impl Segment {
    /// Create a new segment
    pub fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// Byte offset one past the segment end
    ///
    /// Saturates for segments that were never checked against a text.
    pub fn end(&self) -> usize {
        self.index.saturating_add(self.len)
    }

    /// Borrow the segment's text out of the text it was produced from
    pub fn as_str<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.index..self.index.checked_add(self.len)?)
    }
}

/// Lazy boundary sequence produced by a [`Segmenter`]
///
/// Items are fallible so a collaborator can fail part way through; the
/// caller must treat the whole sequence as failed in that case.
pub type Segments<'t> = Box<dyn Iterator<Item = Result<Segment>> + 't>;

/// Produces segment boundaries for a text
///
/// Implementations are bound to one granularity and one locale request
/// for their whole lifetime. Every call to [`Segmenter::segment`] starts
/// a fresh, finite sequence in increasing offset order. The end of the
/// text is never emitted as a segment start.
pub trait Segmenter: Send + Sync + fmt::Debug {
    /// The granularity this segmenter splits at
    fn granularity(&self) -> Granularity;

    /// The locales this segmenter was configured with
    fn locales(&self) -> &LocaleList;

    /// Start a new boundary sequence over `text`
    ///
    /// # Errors
    ///
    /// Returns an error when the segmenter cannot segment at all, for
    /// instance when its locale request is malformed.
    fn segment<'t>(&self, text: &'t str) -> Result<Segments<'t>>;
}
