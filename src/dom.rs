//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate giving the extractors the handful of
//! document operations they need: parsing, selector queries, text and
//! attribute reads, and subtree removal.
//!
//! Selectors arrive from `Options` and may be caller-supplied, so queries go
//! through [`compile`] which logs and skips a selector that does not parse
//! instead of panicking.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_RUN;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// html5ever recovers from any malformed markup, so this never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse an HTML fragment and return its text content.
///
/// Used for markup embedded in JSON-LD string values.
#[must_use]
pub fn fragment_text(html: &str) -> String {
    let doc = parse(html);
    text_content(&doc.select("body")).to_string()
}

// === Selector Queries ===

/// Compile a CSS selector, logging and discarding invalid ones.
#[must_use]
pub fn compile(selector: &str) -> Option<Matcher> {
    match Matcher::new(selector) {
        Ok(matcher) => Some(matcher),
        Err(err) => {
            tracing::warn!(selector, error = ?err, "skipping invalid selector");
            None
        }
    }
}

/// All elements in the document matching `selector`, in document order.
///
/// An invalid selector yields `None`.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    compile(selector).map(|matcher| doc.select_matcher(&matcher))
}

/// All descendants of `sel` matching `selector`, in document order.
#[must_use]
pub fn select_within<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    compile(selector).map(|matcher| sel.select_matcher(&matcher))
}

/// First element in document order matching `selector`.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    select_all(doc, selector)
        .filter(Selection::exists)
        .map(|found| found.first())
}

/// First element in document order matching any of `selectors`.
///
/// Invalid entries are skipped; the rest are queried as one selector group,
/// so position in the document decides, not position in the list.
#[must_use]
pub fn first_match_any<'a, S: AsRef<str>>(doc: &'a Document, selectors: &[S]) -> Option<Selection<'a>> {
    let group = selectors
        .iter()
        .map(AsRef::as_ref)
        .filter(|selector| compile(selector).is_some())
        .collect::<Vec<_>>()
        .join(", ");

    if group.is_empty() {
        return None;
    }
    first_match(doc, &group)
}

// === Text Content ===

/// Get all text content of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Collapse every run of two or more whitespace characters into one newline
/// and trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, "\n").trim().to_string()
}

/// Length in characters, the unit every threshold is expressed in.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

// === Tree Manipulation ===

/// Remove the selected elements (and their subtrees) from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
