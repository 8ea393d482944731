//! HTML meta tag lookups used by the preview extractor.

use crate::dom::{self, Document};
use crate::patterns::{META_DESCRIPTION_SELECTOR, OG_DESCRIPTION_SELECTOR, OG_TITLE_SELECTOR};

/// Trimmed `content` of the first element matching `selector`.
///
/// Empty or whitespace-only values count as absent.
#[must_use]
pub fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    let meta = dom::first_match(doc, selector)?;
    non_empty(&dom::get_attribute(&meta, "content")?)
}

/// `og:title` meta tag.
#[must_use]
pub fn og_title(doc: &Document) -> Option<String> {
    meta_content(doc, OG_TITLE_SELECTOR)
}

/// `og:description` meta tag.
#[must_use]
pub fn og_description(doc: &Document) -> Option<String> {
    meta_content(doc, OG_DESCRIPTION_SELECTOR)
}

/// Standard `<meta name="description">`.
#[must_use]
pub fn meta_description(doc: &Document) -> Option<String> {
    meta_content(doc, META_DESCRIPTION_SELECTOR)
}

/// Text of the document `<title>` element.
#[must_use]
pub fn document_title(doc: &Document) -> Option<String> {
    let title = dom::first_match(doc, "title")?;
    non_empty(&dom::text_content(&title))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
