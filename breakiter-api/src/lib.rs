//! Public API for breakiter
//!
//! This crate provides a stateful break iterator with the classic
//! `adopt_text` / `first` / `next` / `current` protocol on top of a lazy,
//! declarative boundary sequence.
//!
//! # Example
//!
//! ```rust
//! use breakiter_api::{BreakIterator, BreakIteratorOptions, DONE};
//!
//! let mut iter = BreakIterator::new("en", BreakIteratorOptions::character()).unwrap();
//! iter.adopt_text("ab").unwrap();
//!
//! assert_eq!(iter.first(), 0);
//! assert_eq!(iter.next(), 1);
//! assert_eq!(iter.next(), 2); // end of text
//! assert_eq!(iter.next(), DONE);
//! ```

#![warn(missing_docs)]

pub mod break_type;
pub mod config;
pub mod cursor;
pub mod error;
pub mod factory;
pub mod granularity;

// Re-export key types
pub use break_type::BreakType;
pub use config::{BreakIteratorOptions, ResolvedOptions};
pub use cursor::{BreakIterator, DONE};
pub use error::{Error, Result};
pub use factory::{create, BreakIteratorBuilder};

// Re-export from engine for convenience
pub use breakiter_engine::{
    Granularity, LocaleList, Segment, SegmentError, Segmenter, Segments, UnicodeSegmenter,
};

// Convenience functions

/// All boundaries of `text`, including the end of text
///
/// Builds a one-off iterator with the built-in segmenter.
pub fn boundaries<L: Into<LocaleList>>(
    locales: L,
    options: BreakIteratorOptions,
    text: &str,
) -> Result<Vec<usize>> {
    let mut iter = create(locales, options)?;
    iter.adopt_text(text)?;
    Ok(iter.boundaries().collect())
}
