//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [SOURCE_URL] < page.html`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use pitwall_extract::{extract_article_bytes, extract_preview_bytes, ContentSource, Options, PreviewMetadata};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    article_text: Option<String>,
    article_source: Option<ContentSource>,
    article_error: Option<String>,
    preview: Option<PreviewMetadata>,
    preview_error: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let source_url = std::env::args().nth(1).unwrap_or_default();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(error = %err, "failed to read from stdin");
        std::process::exit(1);
    }

    let mut output = Output {
        article_text: None,
        article_source: None,
        article_error: None,
        preview: None,
        preview_error: None,
    };

    match extract_article_bytes(&html, &Options::default()) {
        Ok(article) => {
            output.article_text = Some(article.text);
            output.article_source = Some(article.source);
        }
        Err(err) => output.article_error = Some(err.to_string()),
    }

    match extract_preview_bytes(&html, &source_url) {
        Ok(preview) => output.preview = Some(preview),
        Err(err) => output.preview_error = Some(err.to_string()),
    }

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
