//! Search URL construction.

use url::form_urlencoded;

/// Flag that switches the search into filtered mode; tokens follow it.
const FILTER_FLAG: &str = "&tbs=ic:specific";

/// Separator placed before each filter token (an encoded comma).
const FILTER_SEPARATOR: &str = "%2C";

/// Build the image search URL for `query` with the given filter tokens.
///
/// The query is form-urlencoded. Tokens are opaque, pre-encoded
/// `key:value` pairs and are appended verbatim in order.
///
/// # Example
///
/// ```rust
/// use rs_imagesearch::filters::{Color, Filter, License};
/// use rs_imagesearch::query::build_query_url;
///
/// let url = build_query_url(
///     "https://www.google.com/search",
///     "red panda",
///     &[Filter::from(Color::Red), Filter::from(License::CreativeCommons)],
/// );
/// assert_eq!(
///     url,
///     "https://www.google.com/search?tbm=isch&q=red+panda&tbs=ic:specific%2Cisc:red%2Cil:cl"
/// );
/// ```
#[must_use]
pub fn build_query_url<T: AsRef<str>>(base: &str, query: &str, tokens: &[T]) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    let mut url = format!("{base}?tbm=isch&q={encoded}");

    if !tokens.is_empty() {
        url.push_str(FILTER_FLAG);
    }
    for token in tokens {
        url.push_str(FILTER_SEPARATOR);
        url.push_str(token.as_ref());
    }

    url
}
