use pitwall_extract::{extract_article, extract_article_bytes, extract_article_text, ContentSource, Error, Options};

const BODY: &str = "Max Verstappen converted pole position into victory at the Dutch Grand Prix, \
    holding off a late charge from Lando Norris as rain threatened in the closing laps.";

fn json_ld_page(blocks: &[&str], body_html: &str) -> String {
    let scripts: String = blocks
        .iter()
        .map(|b| format!("<script type=\"application/ld+json\">{b}</script>"))
        .collect();
    format!("<html><head><title>Report</title>{scripts}</head><body>{body_html}</body></html>")
}

fn news_article(body: &str) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": "Dutch GP report",
        "articleBody": body,
    })
    .to_string()
}

#[test]
fn json_ld_body_is_returned_exactly_and_page_clutter_ignored() {
    let html = json_ld_page(
        &[&news_article(BODY)],
        r#"<nav><a href="/">Home</a><a href="/news">News</a></nav>
           <article><p>This DOM paragraph must not appear in the output text.</p></article>
           <footer>FOOTER_TEXT</footer>"#,
    );

    match extract_article(&html, &Options::default()) {
        Ok(article) => {
            assert_eq!(article.text, BODY);
            assert_eq!(article.source, ContentSource::StructuredData);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn malformed_json_ld_does_not_abort_cascade() {
    let html = json_ld_page(
        &["{ \"@type\": \"NewsArticle\", broken", &news_article(BODY), "[1, 2,"],
        "<p>irrelevant</p>",
    );

    let text = extract_article_text(&html).expect("expected Ok(_)");
    assert_eq!(text, BODY);
}

#[test]
fn nav_clutter_absent_and_paragraphs_joined_in_order() {
    let html = r#"
        <html><body>
            <nav>
                <ul>
                    <li><a href="/">Home of the Formula One news site</a></li>
                    <li><a href="/drivers">All drivers and team standings</a></li>
                    <li><a href="/results">Race results and championship</a></li>
                </ul>
            </nav>
            <article>
                <p>First paragraph of the race report with plenty of text.</p>
                <p>Second paragraph describing the pit stop strategy battle.</p>
                <p>Third paragraph quoting the winner after the podium ceremony.</p>
            </article>
        </body></html>
    "#;

    let text = extract_article_text(html).expect("expected Ok(_)");
    assert_eq!(
        text,
        "First paragraph of the race report with plenty of text.\n\n\
         Second paragraph describing the pit stop strategy battle.\n\n\
         Third paragraph quoting the winner after the podium ceremony."
    );
    assert!(!text.contains("Home of the Formula One"));
    assert!(!text.contains("championship"));
}

#[test]
fn json_ld_too_short_falls_back_to_dom() {
    let html = json_ld_page(
        &[&news_article("Too short to be a real body.")],
        r#"<div class="article-body">
              <p>The stewards reviewed the incident after the race had finished.</p>
              <p>They decided that no further action was necessary for either driver.</p>
           </div>"#,
    );

    let article = extract_article(&html, &Options::default()).expect("expected Ok(_)");
    assert_eq!(article.source, ContentSource::TextBlocks);
    assert!(article.text.starts_with("The stewards reviewed"));
}

#[test]
fn markup_only_json_ld_body_falls_back_to_dom() {
    let images = r#"<img src="/gallery/lap-one.jpg">"#.repeat(4);
    let html = json_ld_page(
        &[&news_article(&images)],
        r#"<article>
              <p>The stewards reviewed the incident after the race had finished.</p>
              <p>They decided that no further action was necessary for either driver.</p>
           </article>"#,
    );

    let article = extract_article(&html, &Options::default()).expect("expected Ok(_)");
    assert_eq!(article.source, ContentSource::TextBlocks);
    assert_eq!(
        article.text,
        "The stewards reviewed the incident after the race had finished.\n\n\
         They decided that no further action was necessary for either driver."
    );
}

#[test]
fn main_region_wrapping_article_keeps_every_paragraph() {
    let html = r#"
        <html><body><main>
            <p>Lead paragraph written above the article inside the main region.</p>
            <article><p>Paragraph that sits inside the nested article element.</p></article>
            <p>Closing paragraph written after the article inside the main region.</p>
        </main></body></html>
    "#;

    let text = extract_article_text(html).expect("expected Ok(_)");
    assert!(text.starts_with("Lead paragraph"));
    assert!(text.contains("nested article element"));
    assert!(text.ends_with("inside the main region."));
}

#[test]
fn short_content_fails_instead_of_returning_short_success() {
    let html = r#"
        <html><body>
            <article>
                <p>Only one paragraph that is too short overall.</p>
                <p>Share</p>
            </article>
        </body></html>
    "#;

    assert!(matches!(extract_article_text(html), Err(Error::ExtractionFailed)));
}

#[test]
fn page_of_only_clutter_fails() {
    let html = r#"
        <html><body>
            <header><h1>Site header that is reasonably long in length</h1></header>
            <nav><p>Navigation paragraph with enough characters to count.</p></nav>
            <footer><p>Copyright notice spanning more than twenty chars.</p></footer>
        </body></html>
    "#;

    assert!(matches!(extract_article_text(html), Err(Error::ExtractionFailed)));
}

#[test]
fn generic_div_page_uses_container_text() {
    let words = "Safety car deployed after debris on track at turn four. ".repeat(3);
    let html = format!("<html><body><div><div>{words}</div><div>  Restart on lap 12.  </div></div></body></html>");

    let article = extract_article(&html, &Options::default()).expect("expected Ok(_)");
    assert_eq!(article.source, ContentSource::ContainerText);
    assert!(article.text.ends_with("Restart on lap 12."));
}

#[test]
fn failure_message_is_user_safe() {
    let err = extract_article_text("<p>tiny</p>").expect_err("expected Err(_)");

    assert_eq!(err.to_string(), "could not extract meaningful content from this page");
}

#[test]
fn bytes_with_declared_charset_are_decoded() {
    let mut html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article><p>".to_vec();
    html.extend_from_slice(b"Sergio P\xE9rez finished on the podium after a gritty drive from the back.");
    html.extend_from_slice(b"</p><p>Red Bull praised the strategy calls made during the safety car.</p>");
    html.extend_from_slice(b"</article></body></html>");

    let article = extract_article_bytes(&html, &Options::default()).expect("expected Ok(_)");
    assert!(article.text.contains("Sergio Pérez"));
}
