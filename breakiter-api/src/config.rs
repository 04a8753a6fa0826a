//! Iterator configuration
//!
//! The options bag recognizes a single field, `type`, which defaults to
//! `word`. It is validated once when an iterator is built.

use crate::{error::Result, granularity};
use breakiter_engine::Granularity;

/// Options accepted when creating a break iterator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakIteratorOptions {
    /// Legacy boundary label: `character`, `word` or `sentence`
    ///
    /// `None` means `word`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<String>,
}

impl BreakIteratorOptions {
    /// Options with the default `type`
    pub fn new() -> Self {
        Self::default()
    }

    /// Options requesting the given `type` label
    pub fn with_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
        }
    }

    /// Options for grapheme cluster boundaries
    pub fn character() -> Self {
        Self::with_type("character")
    }

    /// Options for word boundaries
    pub fn word() -> Self {
        Self::with_type("word")
    }

    /// Options for sentence boundaries
    pub fn sentence() -> Self {
        Self::with_type("sentence")
    }

    /// Decode options from a JSON object such as `{"type": "sentence"}`
    ///
    /// Unrecognized fields are ignored. The `type` value is not checked
    /// here; that happens when the iterator is built.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the `type` label
    pub fn granularity(&self) -> Result<Granularity> {
        granularity::resolve(self.kind.as_deref())
    }
}

/// Options an iterator actually runs with
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedOptions {
    /// Most preferred requested locale, or `und`
    pub locale: String,
    /// Legacy boundary label
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

impl ResolvedOptions {
    pub(crate) fn new(locale: &str, granularity: Granularity) -> Self {
        Self {
            locale: locale.to_string(),
            kind: granularity::label(granularity).to_string(),
        }
    }

    /// Encode as a JSON object with `locale` and `type` fields
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
