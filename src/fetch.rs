//! Fetch collaborator seam.
//!
//! Retrieval of the remote page is not done here. Callers supply a
//! [`Fetcher`] (an HTTP client, a proxy wrapper, a test stub) and these
//! helpers run it once and hand the HTML to the extractors. A failed fetch
//! is terminal for the call; nothing is retried.

use url::Url;

use crate::error::{Error, Result};
use crate::extractor;
use crate::metadata;
use crate::result::{ExtractedArticle, PreviewMetadata};
use crate::Options;

/// Failure reported by a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The URL is malformed or not http(s).
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The request could not be completed.
    #[error("network error: {0}")]
    Network(String),
}

/// Retrieves the raw HTML of a page.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> std::result::Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        self(url)
    }
}

/// Check that `url` is an absolute http(s) URL.
pub fn validate_url(url: &str) -> std::result::Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    Ok(parsed)
}

fn fetch_html<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> std::result::Result<String, FetchError> {
    validate_url(url)?;
    fetcher.fetch(url).inspect_err(|err| {
        tracing::warn!(url, error = %err, "fetch failed");
    })
}

/// Fetch a page and extract its article text.
pub fn fetch_article_text<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    options: &Options,
) -> Result<ExtractedArticle> {
    let html = fetch_html(fetcher, url).map_err(Error::FetchFailed)?;
    extractor::extract_article(&html, options)
}

/// Fetch a page and build its preview.
///
/// The preview path has a single failure kind, so fetch errors surface as
/// [`Error::PreviewUnavailable`].
pub fn fetch_article_preview<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> Result<PreviewMetadata> {
    let html = fetch_html(fetcher, url).map_err(|_| Error::PreviewUnavailable)?;
    metadata::extract_preview(&html, url)
}
