//! Segment assembly module
//!
//! Drains a lazy boundary sequence into an owned vector and checks that it
//! describes a partition of the text. Nothing is returned unless the whole
//! sequence is valid, which lets callers swap state in atomically.

use crate::{
    error::{Result, SegmentError},
    segmenter::{Segment, Segmenter, Segments},
};

/// Assembler for materializing boundary sequences
#[derive(Debug, Default)]
pub struct SegmentAssembler;

impl SegmentAssembler {
    /// Create a new segment assembler
    pub fn new() -> Self {
        Self
    }

    /// Run `segmenter` once over `text` and assemble the result
    pub fn segment_text(&self, segmenter: &dyn Segmenter, text: &str) -> Result<Vec<Segment>> {
        let segments = segmenter.segment(text)?;
        self.assemble(segments, text)
    }

    /// Collect and validate a boundary sequence produced for `text`
    ///
    /// Segments must start at 0, be strictly increasing, start on char
    /// boundaries and tile the text without gaps or overlaps.
    pub fn assemble(&self, segments: Segments<'_>, text: &str) -> Result<Vec<Segment>> {
        let mut result: Vec<Segment> = Vec::new();
        let mut expected_start = 0;

        for segment in segments {
            let segment = segment?;
            let offset = segment.index;

            match result.last() {
                Some(previous) if offset <= previous.index => {
                    return Err(SegmentError::Unordered {
                        offset,
                        previous: previous.index,
                    });
                }
                None if offset != 0 => {
                    return Err(SegmentError::MissingLeadingBoundary { offset });
                }
                _ => {}
            }

            if offset >= text.len() {
                return Err(SegmentError::OutOfRange {
                    offset,
                    len: text.len(),
                });
            }

            if !text.is_char_boundary(offset) {
                return Err(SegmentError::NotCharBoundary { offset });
            }

            if offset != expected_start {
                return Err(SegmentError::Discontiguous {
                    end: expected_start,
                    next: offset,
                });
            }

            expected_start = match offset.checked_add(segment.len) {
                Some(end) if segment.len > 0 && end <= text.len() => end,
                _ => {
                    return Err(SegmentError::InvalidLength {
                        offset,
                        len: segment.len,
                    });
                }
            };

            result.push(segment);
        }

        if expected_start != text.len() {
            return Err(SegmentError::Discontiguous {
                end: expected_start,
                next: text.len(),
            });
        }

        Ok(result)
    }
}
