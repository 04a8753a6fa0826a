//! API error types

use breakiter_engine::SegmentError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum Error {
    /// The requested `type` option names no known granularity
    #[error("Type \"{0}\" is not supported.")]
    UnsupportedGranularity(String),

    /// Builder misuse, such as a segmenter that disagrees with `type`
    #[error("configuration error: {0}")]
    Config(String),

    /// The segmenter failed while a text was being adopted
    #[error("segmentation failed: {0}")]
    Segmentation(#[from] SegmentError),

    /// An options bag could not be decoded
    #[cfg(feature = "serde")]
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
