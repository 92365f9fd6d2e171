//! URL utility functions.
//!
//! Validation helpers used before assets are fetched and by callers that
//! want to check the URLs carried by a [`Record`](crate::Record).

use url::Url;

/// Parse `s` as an absolute `http`/`https` URL with a host.
///
/// # Examples
/// ```
/// use rs_imagesearch::url_utils::parse_absolute_url;
///
/// assert!(parse_absolute_url("https://example.com/a.png").is_some());
/// assert!(parse_absolute_url("/a.png").is_none());
/// assert!(parse_absolute_url("data:image/png;base64,AAAA").is_none());
/// ```
#[must_use]
pub fn parse_absolute_url(s: &str) -> Option<Url> {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Check if a string is a valid absolute `http`/`https` URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    parse_absolute_url(s).is_some()
}
