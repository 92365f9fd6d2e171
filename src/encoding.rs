//! Character encoding detection and transcoding for fetched pages.
//!
//! The charset is taken from the response `Content-Type` header when one is
//! declared, then from a `<meta>` declaration near the top of the page, and
//! falls back to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes scanned for a `<meta>` charset declaration.
const META_SCAN_BYTES: usize = 1024;

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Match `<meta charset="...">` or the `http-equiv` form
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Extract the charset label from a `Content-Type` header value.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn charset_from_meta(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the character encoding of a fetched page.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(label) = content_type.and_then(charset_from_content_type) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return encoding;
        }
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SCAN_BYTES)]);
    if let Some(label) = charset_from_meta(&head) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcode page bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use rs_imagesearch::encoding::transcode_to_utf8;
///
/// let page = transcode_to_utf8(b"Caf\xE9", Some("text/html; charset=ISO-8859-1"));
/// assert_eq!(page, "Café");
/// ```
#[must_use]
pub fn transcode_to_utf8(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
