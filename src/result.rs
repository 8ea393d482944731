//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Which cascade stage produced an article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// A JSON-LD article node's `articleBody`.
    StructuredData,
    /// Paragraph, heading, list-item and quote blocks of the content container.
    TextBlocks,
    /// The container's whole text, used when it holds no text blocks.
    ContainerText,
}

/// Article body recovered from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    /// Plain text, paragraphs separated by a blank line.
    pub text: String,

    /// Stage of the cascade that produced `text`.
    pub source: ContentSource,
}

/// Title and snippet for a preview card.
///
/// Always fully populated: missing fields carry placeholder strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMetadata {
    /// `og:title`, else the document `<title>`, else a placeholder.
    pub title: String,
    /// `og:description`, else the description meta tag, else a placeholder.
    pub snippet: String,
    /// Originating URL, passed through untouched.
    pub url: String,
}
