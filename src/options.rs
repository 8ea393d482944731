//! Configuration options for article extraction.
//!
//! The `Options` struct carries every tunable of the extraction cascade: the
//! length thresholds and the selector tables. Defaults come from the named
//! constants in `patterns`.

use crate::patterns;

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pitwall_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Relax the article threshold for short wire items
/// let options = Options {
///     min_article_len: 60,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum length (chars) of the final article text.
    ///
    /// Shorter results make the whole extraction fail.
    ///
    /// Default: `100`
    pub min_article_len: usize,

    /// A JSON-LD `articleBody` must be longer than this (chars) to be used.
    ///
    /// Default: `100`
    pub min_json_ld_body_len: usize,

    /// A text block must be longer than this (chars) after trimming.
    ///
    /// Separates body prose from short labels such as "Share" or "Read more".
    ///
    /// Default: `20`
    pub min_block_len: usize,

    /// Selectors for subtrees removed before heuristic extraction.
    ///
    /// Default: `patterns::CLUTTER_SELECTORS`
    pub clutter_selectors: Vec<String>,

    /// Main-content container selectors, queried together in document order.
    ///
    /// Default: `patterns::CONTENT_SELECTORS`
    pub content_selectors: Vec<String>,

    /// Selector for the text blocks read inside the chosen container.
    ///
    /// Default: `patterns::TEXT_BLOCK_SELECTOR`
    pub text_block_selector: String,
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_article_len: patterns::MIN_ARTICLE_LEN,
            min_json_ld_body_len: patterns::MIN_JSON_LD_BODY_LEN,
            min_block_len: patterns::MIN_BLOCK_LEN,
            clutter_selectors: owned(patterns::CLUTTER_SELECTORS),
            content_selectors: owned(patterns::CONTENT_SELECTORS),
            text_block_selector: patterns::TEXT_BLOCK_SELECTOR.to_string(),
        }
    }
}
