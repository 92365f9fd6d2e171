//! Configuration options for searching and extraction.
//!
//! The `Options` struct controls where the embedded data is looked for,
//! how the search page is requested, and how assets are fetched.

use std::time::Duration;

/// Desktop browser identifier sent with every request.
///
/// The search page only carries the embedded result data for this style of
/// client; other identifiers get a different, script-free layout.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.104 Safari/537.36";

/// Configuration options for search and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_imagesearch::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Token that prefixes the data-injection script block.
    ///
    /// The last occurrence in the page is used.
    ///
    /// Default: `"AF_initDataCallback"`
    pub marker: String,

    /// Marker that closes the data-injection script block.
    ///
    /// Default: `"</script>"`
    pub script_close: String,

    /// Number of characters between the end of the JSON array and the
    /// closing marker.
    ///
    /// Upstream appends `, sideChannel: {}});` after the data array. This is
    /// an empirical width, not derived from the structure.
    ///
    /// Default: `20`
    pub trailing_trim: usize,

    /// Search endpoint the query URL is built on.
    ///
    /// Default: `"https://www.google.com/search"`
    pub search_url: String,

    /// Client identifier header sent with page and asset requests.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Per-request timeout for page and asset fetches.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marker: "AF_initDataCallback".to_string(),
            script_close: "</script>".to_string(),
            trailing_trim: 20,
            search_url: "https://www.google.com/search".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
