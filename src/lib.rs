//! # pitwall-extract
//!
//! Article text and preview extraction for news pages.
//!
//! Given the raw HTML of an arbitrary news page, this library recovers the
//! article's main body text and a short preview (title and snippet), without
//! any site-specific configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use pitwall_extract::{extract_article_text, extract_preview};
//!
//! let html = r#"<html><head><title>Monza report</title></head><body>
//! <nav><a href="/">Home</a></nav>
//! <article>
//!   <p>Charles Leclerc won the Italian Grand Prix on Sunday afternoon.</p>
//!   <p>The Ferrari driver made a one-stop strategy work to the flag.</p>
//! </article></body></html>"#;
//!
//! let text = extract_article_text(html)?;
//! assert!(text.starts_with("Charles Leclerc"));
//!
//! let preview = extract_preview(html, "https://example.com/monza")?;
//! assert_eq!(preview.title, "Monza report");
//! # Ok::<(), pitwall_extract::Error>(())
//! ```
//!
//! ## Extraction cascade
//!
//! 1. **Structured data**: a JSON-LD `Article`, `NewsArticle` or
//!    `BlogPosting` node with a full `articleBody`.
//! 2. **DOM heuristics**: clutter removal, then the text blocks of the first
//!    matching content container.
//!
//! The result must be at least `Options::min_article_len` characters long,
//! otherwise [`Error::ExtractionFailed`] is returned.
//!
//! Every call parses its own document and holds no shared state, so article
//! and preview extraction can run concurrently on separate threads.

mod error;
mod options;
mod result;

/// Selector tables, thresholds and compiled patterns.
pub mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Article text extraction cascade.
pub mod extractor;

/// Preview metadata (Open Graph and meta tags).
pub mod metadata;

/// Charset detection for raw page bytes.
pub mod encoding;

/// Fetch collaborator seam.
pub mod fetch;

/// Analysis service request/response contract.
pub mod analysis;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{fetch_article_preview, fetch_article_text, FetchError, Fetcher};
pub use metadata::extract_preview;
pub use options::Options;
pub use result::{ContentSource, ExtractedArticle, PreviewMetadata};

/// Extracts the article body text from an HTML document using default options.
///
/// Paragraphs are separated by a blank line.
pub fn extract_article_text(html: &str) -> Result<String> {
    extract_article(html, &Options::default()).map(|article| article.text)
}

/// Extracts the article body with custom options, reporting which cascade
/// stage produced it.
///
/// # Example
///
/// ```rust
/// use pitwall_extract::{extract_article, ContentSource, Options};
///
/// let html = "<article><p>A brief wire item about the sprint race result.</p></article>";
/// let options = Options {
///     min_article_len: 20,
///     ..Options::default()
/// };
/// let article = extract_article(html, &options)?;
/// assert_eq!(article.source, ContentSource::TextBlocks);
/// # Ok::<(), pitwall_extract::Error>(())
/// ```
pub fn extract_article(html: &str, options: &Options) -> Result<ExtractedArticle> {
    extractor::extract_article(html, options)
}

/// Extracts the article body from raw bytes, honouring the declared charset.
pub fn extract_article_bytes(html: &[u8], options: &Options) -> Result<ExtractedArticle> {
    extract_article(&encoding::decode_html(html), options)
}

/// Builds preview metadata from raw bytes, honouring the declared charset.
pub fn extract_preview_bytes(html: &[u8], source_url: &str) -> Result<PreviewMetadata> {
    extract_preview(&encoding::decode_html(html), source_url)
}
