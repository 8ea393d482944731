//! Clutter Removal
//!
//! Removes non-content subtrees (scripts, navigation, page chrome, ARIA
//! landmarks, ads, sidebars, comments, cookie banners) before the DOM
//! heuristics run. Without it, navigation link text leaks into the
//! text-block filter.

use crate::dom::{self, Document};

/// Remove every element matching any of `selectors`.
///
/// Returns the number of elements removed. Invalid selectors are logged and
/// skipped. Removal is idempotent: a second pass over the same document
/// finds nothing left to remove.
pub fn strip<S: AsRef<str>>(doc: &Document, selectors: &[S]) -> usize {
    let mut removed = 0;

    for selector in selectors {
        let Some(found) = dom::select_all(doc, selector.as_ref()) else {
            continue;
        };
        let count = found.length();
        if count > 0 {
            dom::remove(&found);
            removed += count;
        }
    }

    tracing::debug!(removed, "stripped clutter");
    removed
}
