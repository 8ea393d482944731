//! Preview metadata extraction.
//!
//! A lighter path than article extraction: reads the Open Graph and standard
//! meta tags for a preview card. Missing fields never fail the call; they
//! are filled with placeholder strings.
//!
//! Title precedence: `og:title` → `<title>` → "No title found".
//! Snippet precedence: `og:description` → `<meta name="description">` →
//! "No description available for this article.".

pub mod meta_tags;

use crate::dom;
use crate::error::Result;
use crate::patterns::{SNIPPET_PLACEHOLDER, TITLE_PLACEHOLDER};
use crate::result::PreviewMetadata;

/// Build preview metadata for a page.
///
/// Any input parses, so a page with no usable tags (including an empty
/// string) gets both placeholders. Never fails today;
/// [`Error::PreviewUnavailable`](crate::Error::PreviewUnavailable) is raised
/// by callers that could not obtain the page at all.
pub fn extract_preview(html: &str, source_url: &str) -> Result<PreviewMetadata> {
    let doc = dom::parse(html);

    let title = meta_tags::og_title(&doc)
        .or_else(|| meta_tags::document_title(&doc))
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

    let snippet = meta_tags::og_description(&doc)
        .or_else(|| meta_tags::meta_description(&doc))
        .unwrap_or_else(|| SNIPPET_PLACEHOLDER.to_string());

    Ok(PreviewMetadata {
        title,
        snippet,
        url: source_url.to_string(),
    })
}
