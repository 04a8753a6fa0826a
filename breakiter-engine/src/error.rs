//! Segmentation error types

use thiserror::Error;

/// Errors raised while producing or validating a boundary sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A requested locale tag is not well formed
    #[error("incorrect locale information provided: '{tag}'")]
    MalformedLocale {
        /// The offending tag, verbatim
        tag: String,
    },

    /// A boundary lies at or past the end of the text
    #[error("boundary {offset} is out of range for text of length {len}")]
    OutOfRange {
        /// The byte offset reported by the segmenter
        offset: usize,
        /// Byte length of the segmented text
        len: usize,
    },

    /// Boundaries were not strictly increasing
    #[error("boundary {offset} does not follow previous boundary {previous}")]
    Unordered {
        /// The byte offset reported by the segmenter
        offset: usize,
        /// The boundary emitted just before it
        previous: usize,
    },

    /// A boundary splits a UTF-8 sequence
    #[error("boundary {offset} is not on a char boundary")]
    NotCharBoundary {
        /// The byte offset reported by the segmenter
        offset: usize,
    },

    /// The first segment of a non-empty text does not start at zero
    #[error("first boundary must be 0, got {offset}")]
    MissingLeadingBoundary {
        /// The first byte offset reported by the segmenter
        offset: usize,
    },

    /// A segment is empty or runs past the end of the text
    #[error("segment at {offset} has invalid length {len}")]
    InvalidLength {
        /// Byte offset of the segment start
        offset: usize,
        /// The byte length reported by the segmenter
        len: usize,
    },

    /// A segment does not end where the next one starts
    ///
    /// For the last segment, `next` is the text length.
    #[error("segment ends at {end} but the next one starts at {next}")]
    Discontiguous {
        /// Byte offset one past the segment end
        end: usize,
        /// Byte offset where the following segment (or the text) starts
        next: usize,
    },

    /// A custom segmenter failed for its own reasons
    #[error("segmenter failed: {0}")]
    Failed(String),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;
