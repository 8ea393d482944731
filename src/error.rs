//! Error types for pitwall-extract.
//!
//! Every failure that leaves the crate is one of these variants. Messages are
//! static and safe to show to an end user; parser internals never leak.

use crate::fetch::FetchError;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Every cascade stage was exhausted, or the result was too short.
    #[error("could not extract meaningful content from this page")]
    ExtractionFailed,

    /// The page could not be retrieved by the fetch collaborator.
    #[error("could not fetch the article; the website might be blocking requests")]
    FetchFailed(#[source] FetchError),

    /// The page could not be treated as an HTML document at all.
    #[error("could not parse the page to generate a preview")]
    PreviewUnavailable,

    /// The remote analysis service answered with an unusable payload.
    #[error("invalid analysis response: {0}")]
    InvalidAnalysisResponse(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
