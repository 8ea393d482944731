//! JSON-LD Article Body Extraction
//!
//! Scans `<script type="application/ld+json">` blocks for a Schema.org
//! article node carrying a full `articleBody`. When present this is the most
//! reliable source of article text, so it is tried before any DOM heuristic.

use serde_json::Value;

use crate::dom::{self, Document, Selection};
use crate::patterns::{ARTICLE_TYPES, JSON_LD_SCRIPT_SELECTOR};
use crate::Options;

/// An article node found in structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCandidate {
    /// The matching `@type` value.
    pub type_tag: String,
    /// Raw `articleBody`, possibly containing inline markup.
    pub body_html: String,
}

impl ArticleCandidate {
    /// Plain-text rendering of the body with whitespace runs collapsed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        dom::normalize_whitespace(&dom::fragment_text(&self.body_html))
    }
}

/// Extract article text from the first qualifying JSON-LD node.
///
/// Returns `None` when no block yields a candidate, which is the common
/// case and hands off to the DOM heuristics. A body that is all markup and
/// renders to no text also hands off.
#[must_use]
pub fn extract(doc: &Document, options: &Options) -> Option<String> {
    let candidate = find_article(doc, options)?;
    let text = candidate.plain_text();
    if text.is_empty() {
        tracing::debug!(type_tag = %candidate.type_tag, "JSON-LD articleBody has no text");
        return None;
    }

    tracing::debug!(
        type_tag = %candidate.type_tag,
        body_len = candidate.body_html.len(),
        "using JSON-LD articleBody"
    );
    Some(text)
}

/// Find the first article node across all JSON-LD blocks, in document order.
///
/// Malformed blocks are logged and skipped.
#[must_use]
pub fn find_article(doc: &Document, options: &Options) -> Option<ArticleCandidate> {
    let scripts = dom::select_all(doc, JSON_LD_SCRIPT_SELECTOR)?;

    for (index, node) in scripts.nodes().iter().enumerate() {
        let script = Selection::from(*node);
        let json_text = dom::text_content(&script);
        let json_text = json_text.trim();

        if json_text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(json_text) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(block = index, error = %err, "could not parse a JSON-LD block");
                continue;
            }
        };

        let found = candidate_nodes(&data)
            .into_iter()
            .find_map(|node| article_candidate(node, options.min_json_ld_body_len));
        if found.is_some() {
            return found;
        }
    }

    None
}

/// Flatten a parsed block into the nodes worth inspecting.
///
/// A root `@graph` array wins, then a root array, then the root itself.
fn candidate_nodes(root: &Value) -> Vec<&Value> {
    if let Some(Value::Array(graph)) = root.get("@graph") {
        return graph.iter().collect();
    }

    match root {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

fn article_candidate(node: &Value, min_body_len: usize) -> Option<ArticleCandidate> {
    let type_tag = article_type(node.get("@type")?)?;
    let body = node.get("articleBody")?.as_str()?;

    if dom::char_len(body) <= min_body_len {
        return None;
    }

    Some(ArticleCandidate {
        type_tag: type_tag.to_string(),
        body_html: body.to_string(),
    })
}

/// `@type` may be a single string or a list of strings.
fn article_type(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => ARTICLE_TYPES.contains(&s.as_str()).then_some(s.as_str()),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| ARTICLE_TYPES.contains(t)),
        _ => None,
    }
}
