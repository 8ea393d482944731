//! Article extraction cascade.
//!
//! Stages run strictest first and the first one to produce text wins:
//!
//! 1. JSON-LD `articleBody` ([`json_ld`](super::json_ld))
//! 2. Clutter removal ([`clutter`](super::clutter)) followed by container
//!    text blocks ([`blocks`](super::blocks))
//!
//! Whatever comes out must reach `min_article_len`; otherwise the whole
//! extraction fails rather than returning a short or empty success.

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::result::{ContentSource, ExtractedArticle};
use crate::Options;

use super::{blocks, clutter, json_ld};

/// Run the cascade over an HTML string.
pub fn extract_article(html: &str, options: &Options) -> Result<ExtractedArticle> {
    tracing::debug!(html_len = html.len(), "starting article extraction");

    let doc = dom::parse(html);
    let article = structured_data(&doc, options)
        .or_else(|| dom_heuristics(&doc, options))
        .ok_or(Error::ExtractionFailed)?;

    validate(article, options)
}

fn structured_data(doc: &Document, options: &Options) -> Option<ExtractedArticle> {
    json_ld::extract(doc, options).map(|text| ExtractedArticle {
        text,
        source: ContentSource::StructuredData,
    })
}

fn dom_heuristics(doc: &Document, options: &Options) -> Option<ExtractedArticle> {
    clutter::strip(doc, &options.clutter_selectors);
    blocks::select(doc, options).map(|(text, source)| ExtractedArticle { text, source })
}

/// Enforce the minimum-length invariant on the final text.
fn validate(article: ExtractedArticle, options: &Options) -> Result<ExtractedArticle> {
    let len = dom::char_len(&article.text);
    if len < options.min_article_len {
        tracing::debug!(
            len,
            min = options.min_article_len,
            source = ?article.source,
            "extracted text too short"
        );
        return Err(Error::ExtractionFailed);
    }

    Ok(article)
}
