//! Charset detection for raw page bytes.
//!
//! Fetched pages do not always arrive as UTF-8. The declared charset is read
//! from the document head and the bytes are decoded lossily, so a bad byte
//! becomes U+FFFD instead of an error.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` and `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("META_CHARSET_RE regex")
});

/// Encoding declared in the first bytes of `html`, or UTF-8.
///
/// A UTF-16 declaration is read as UTF-8: a meta tag that could be read as
/// ASCII cannot be in UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    let declared = META_CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8);

    if declared == UTF_16LE || declared == UTF_16BE {
        UTF_8
    } else {
        declared
    }
}

/// Decode page bytes to a string using the declared charset.
///
/// # Examples
///
/// ```
/// use pitwall_extract::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>P\xE9rez</p>";
/// assert!(decode_html(html).contains("Pérez"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    if encoding != UTF_8 {
        tracing::debug!(encoding = encoding.name(), "decoding non-UTF-8 page");
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded
}
