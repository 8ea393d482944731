//! Content Block Selection
//!
//! Picks the main content container and joins its meaningful text blocks.
//!
//! The container is the first element in document order that matches any of
//! the content selectors, not the best-scoring one: an outer `main` wins over
//! an `article` nested inside it, whatever the amount of text underneath
//! either. Without a match the whole `body` is used.

use crate::dom::{self, Document, Selection};
use crate::result::ContentSource;
use crate::Options;

/// Separator placed between surviving text blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Locate the main content container.
///
/// Returns `None` only for a document without a `body`, which html5ever
/// never produces.
#[must_use]
pub fn find_container<'a>(doc: &'a Document, options: &Options) -> Option<Selection<'a>> {
    if let Some(container) = dom::first_match_any(doc, &options.content_selectors) {
        tracing::debug!("content container matched");
        return Some(container);
    }

    tracing::debug!("no content container matched; using body");
    dom::first_match(doc, "body")
}

/// Extract text from the chosen container.
///
/// Blocks are read in document order; a block survives if its trimmed text
/// is longer than `min_block_len`. A container with no blocks at all falls
/// back to its full, whitespace-normalized text.
#[must_use]
pub fn select(doc: &Document, options: &Options) -> Option<(String, ContentSource)> {
    let container = find_container(doc, options)?;

    let blocks = dom::select_within(&container, &options.text_block_selector)
        .filter(Selection::exists);

    let Some(blocks) = blocks else {
        let text = dom::normalize_whitespace(&dom::text_content(&container));
        return Some((text, ContentSource::ContainerText));
    };

    let kept: Vec<String> = blocks
        .nodes()
        .iter()
        .filter_map(|node| {
            let text = dom::text_content(&Selection::from(*node));
            let text = text.trim();
            (dom::char_len(text) > options.min_block_len).then(|| text.to_string())
        })
        .collect();

    tracing::debug!(
        blocks = blocks.length(),
        kept = kept.len(),
        "collected text blocks"
    );

    Some((kept.join(BLOCK_SEPARATOR), ContentSource::TextBlocks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> (String, ContentSource) {
        let doc = dom::parse(html);
        select(&doc, &Options::default()).unwrap()
    }

    #[test]
    fn test_earlier_container_wins() {
        let (text, source) = run(
            r#"<body>
                <main><p>Text that lives only in the main element.</p></main>
                <article><p>Text that lives only in the article element.</p></article>
            </body>"#,
        );

        assert_eq!(source, ContentSource::TextBlocks);
        assert_eq!(text, "Text that lives only in the main element.");
    }

    #[test]
    fn test_list_position_does_not_decide() {
        let (text, _) = run(
            r#"<body>
                <div class="entry-content"><p>Entry content paragraph text here.</p></div>
                <article><p>Teaser card paragraph text below it.</p></article>
            </body>"#,
        );

        assert_eq!(text, "Entry content paragraph text here.");
    }

    #[test]
    fn test_document_order_ignores_text_volume() {
        let (text, _) = run(
            r#"<body>
                <div class="post-content"><p>A short but valid post paragraph.</p></div>
                <main><p>A much longer main paragraph that carries far more text than the post content does.</p></main>
            </body>"#,
        );

        assert_eq!(text, "A short but valid post paragraph.");
    }

    #[test]
    fn test_outer_main_keeps_nested_article() {
        let (text, _) = run(
            r#"<body><main>
                <p>Lead paragraph sitting above the article in the main region.</p>
                <article><p>Paragraph inside the nested article element itself.</p></article>
                <p>Closing paragraph placed after the article in the main region.</p>
            </main></body>"#,
        );

        assert_eq!(
            text,
            "Lead paragraph sitting above the article in the main region.\n\n\
             Paragraph inside the nested article element itself.\n\n\
             Closing paragraph placed after the article in the main region."
        );
    }

    #[test]
    fn test_body_used_without_container() {
        let (text, _) = run("<body><div><p>Paragraph placed directly in a generic div.</p></div></body>");

        assert_eq!(text, "Paragraph placed directly in a generic div.");
    }

    #[test]
    fn test_short_blocks_filtered_and_joined() {
        let (text, _) = run(
            r#"<article>
                <h1>Verstappen takes pole in Monza</h1>
                <p>Share</p>
                <p>  The Dutchman edged his team-mate by a tenth.  </p>
                <li>Read more</li>
                <blockquote>"The car was mega today," he said afterwards.</blockquote>
            </article>"#,
        );

        assert_eq!(
            text,
            "Verstappen takes pole in Monza\n\n\
             The Dutchman edged his team-mate by a tenth.\n\n\
             \"The car was mega today,\" he said afterwards."
        );
    }

    #[test]
    fn test_block_threshold_is_exclusive() {
        let exactly_20 = "a".repeat(20);
        let exactly_21 = "b".repeat(21);
        let (text, _) = run(&format!("<article><p>{exactly_20}</p><p>{exactly_21}</p></article>"));

        assert_eq!(text, exactly_21);
    }

    #[test]
    fn test_container_text_fallback() {
        let (text, source) = run(
            r#"<article><div>First line of a div-only page</div>
                <div>Second   line</div></article>"#,
        );

        assert_eq!(source, ContentSource::ContainerText);
        assert_eq!(text, "First line of a div-only page\nSecond\nline");
    }

    #[test]
    fn test_substituted_tables() {
        let doc = dom::parse(
            r#"<body><article><p>Article paragraph that should be skipped.</p></article>
               <section id="story"><p>Story paragraph chosen by custom table.</p></section></body>"#,
        );
        let options = Options {
            content_selectors: vec!["#story".to_string()],
            ..Options::default()
        };

        let (text, _) = select(&doc, &options).unwrap();
        assert_eq!(text, "Story paragraph chosen by custom table.");
    }
}
