//! Boundary production for the breakiter cursor
//!
//! This crate owns the collaborator side of a break iterator: the
//! [`Segmenter`] interface that turns text into a lazy sequence of segment
//! start offsets, a built-in [`UnicodeSegmenter`] backed by UAX #29 rules,
//! and the [`SegmentAssembler`] that drains and validates that sequence.

#![warn(missing_docs)]

pub mod assembler;
pub mod error;
pub mod granularity;
pub mod locale;
pub mod segmenter;

// Re-export key types
pub use assembler::SegmentAssembler;
pub use error::{Result, SegmentError};
pub use granularity::Granularity;
pub use locale::LocaleList;
pub use segmenter::{Segment, Segmenter, Segments, UnicodeSegmenter};
