//! Legacy `type` labels and their granularities
//!
//! Break iterators are configured with the labels `character`, `word` and
//! `sentence`. Segmenters speak in [`Granularity`] instead.

use crate::error::{Error, Result};
use breakiter_engine::Granularity;

/// Label used when the caller gives no `type`
pub const DEFAULT_LABEL: &str = "word";

/// Resolve an optional `type` label to a granularity
///
/// A missing label means `word`. Labels are matched exactly.
///
/// # Errors
///
/// Returns [`Error::UnsupportedGranularity`] carrying the label when it
/// is not one of `character`, `word` or `sentence`.
pub fn resolve(kind: Option<&str>) -> Result<Granularity> {
    match kind.unwrap_or(DEFAULT_LABEL) {
        "character" => Ok(Granularity::Grapheme),
        "word" => Ok(Granularity::Word),
        "sentence" => Ok(Granularity::Sentence),
        other => Err(Error::UnsupportedGranularity(other.to_string())),
    }
}

/// The label a granularity is requested with
pub fn label(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Grapheme => "character",
        Granularity::Word => "word",
        Granularity::Sentence => "sentence",
    }
}
