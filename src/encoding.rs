//! Charset sniffing for byte input.
//!
//! Saved pages and piped input are not always UTF-8. The declared charset is
//! looked up in the first KiB and the bytes are decoded lossily.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// A `charset=` label inside any `<meta>` tag. Covers both
/// `<meta charset="utf-8">` and the `content="text/html; charset=..."`
/// form of `http-equiv`.
#[allow(clippy::expect_used)]
static META_CHARSET_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([a-z0-9_.:-]+)"#).expect("valid regex")
});

/// Declared charset label, if any.
fn sniff_charset(head: &str) -> Option<&str> {
    META_CHARSET_LABEL_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Encoding declared by the document, UTF-8 when absent or unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    sniff_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes HTML bytes to a UTF-8 string, replacing invalid sequences with
/// U+FFFD.
///
/// ```
/// use selector_scout::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let (decoded, _, _) = detect_encoding(html).decode(html);
    decoded.into_owned()
}
