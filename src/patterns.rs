//! Selector tables, thresholds and compiled regex patterns.
//!
//! Everything the extraction heuristics are tuned with lives here as data.
//! `Options::default()` copies these tables, so callers can swap any of them
//! without touching the traversal code.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Thresholds
// =============================================================================

/// Minimum length (chars) of an extracted article for it to count as valid.
pub const MIN_ARTICLE_LEN: usize = 100;

/// A JSON-LD `articleBody` must be strictly longer than this (chars).
pub const MIN_JSON_LD_BODY_LEN: usize = 100;

/// A text block must be strictly longer than this (chars) to survive.
pub const MIN_BLOCK_LEN: usize = 20;

// =============================================================================
// Structured data
// =============================================================================

/// Script blocks carrying JSON-LD.
pub const JSON_LD_SCRIPT_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Schema.org `@type` values accepted as an article source.
pub const ARTICLE_TYPES: &[&str] = &["Article", "NewsArticle", "BlogPosting"];

// =============================================================================
// Clutter denylist
// =============================================================================

/// Subtrees removed before heuristic extraction.
pub const CLUTTER_SELECTORS: &[&str] = &[
    // Non-rendered
    "script",
    "style",
    // Structural chrome
    "nav",
    "footer",
    "aside",
    "header",
    // ARIA landmarks
    r#"[role="navigation"]"#,
    r#"[role="banner"]"#,
    r#"[role="complementary"]"#,
    r#"[role="contentinfo"]"#,
    // Ads, sidebars, comments, cookie banners
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    ".sidebar",
    ".comments",
    "#comments",
    ".cookie-banner",
];

// =============================================================================
// Content containers
// =============================================================================

/// Main-content containers. Queried as one group: the first element in
/// document order matching any entry wins; `body` is used when none match.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".article",
    ".article-body",
    "#article-body",
    ".entry-content",
    ".post-body",
    ".post-content",
    "#main-content",
    ".story-content",
    "main",
];

/// Elements read as individual text blocks inside the container.
pub const TEXT_BLOCK_SELECTOR: &str = "p, h1, h2, h3, li, blockquote";

// =============================================================================
// Preview
// =============================================================================

pub const OG_TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;
pub const OG_DESCRIPTION_SELECTOR: &str = r#"meta[property="og:description"]"#;
pub const META_DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

pub const TITLE_PLACEHOLDER: &str = "No title found";
pub const SNIPPET_PLACEHOLDER: &str = "No description available for this article.";

// =============================================================================
// Text normalization
// =============================================================================

/// Runs of two or more whitespace characters.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("WHITESPACE_RUN regex"));
