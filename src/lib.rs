//! # rs-imagesearch
//!
//! Image search result extraction from server-rendered search pages.
//!
//! The result data on an image search page is not in the markup itself but
//! in a loosely typed JSON array injected by a script call. This library
//! locates that array, decodes it, walks its positional layout defensively,
//! and returns typed [`Record`]s. It can also fetch the page and download
//! the referenced images.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_imagesearch::extract;
//!
//! // A saved results page
//! let page = "<html><script>AF_initDataCallback({key: 'ds:1', data:[], sideChannel: {}});</script></html>";
//!
//! match extract(page, 10) {
//!     Ok(records) => println!("{} results", records.len()),
//!     Err(e) if e.is_format_error() => eprintln!("page layout changed: {e}"),
//!     Err(e) => eprintln!("extraction failed: {e}"),
//! }
//! ```
//!
//! ## Failure model
//!
//! - A page whose structure cannot be followed yields
//!   [`Error::ExtractionFormatError`], tagged with the [`Phase`] that failed.
//! - A located block that is not JSON yields [`Error::DecodeError`].
//! - Individual entries that are empty or malformed are skipped; they only
//!   reduce the number of records. Malformed ones are listed in
//!   [`Extraction::dropped`] with their [`Phase::Entry`] error text.

mod error;
mod options;
mod record;

/// Locating the embedded data block in a page.
pub mod locator;

/// Guarded navigation over decoded JSON.
pub mod navigate;

/// Extraction pipeline and upstream layout paths.
pub mod extract;

/// Search filter tokens.
pub mod filters;

/// Search URL construction.
pub mod query;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page and asset fetching.
pub mod fetch;

/// Image type detection.
pub mod sniff;

/// Asset downloading.
pub mod download;

/// Search facade.
pub mod search;

/// URL utilities.
pub mod url_utils;

// Public API - re-exports
pub use download::DownloadReport;
pub use error::{Error, Phase, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use filters::Filter;
pub use options::{Options, DEFAULT_USER_AGENT};
pub use record::{DroppedEntry, Extraction, Record};
pub use search::ImageSearch;

use std::path::Path;

/// Extracts up to `limit` records from a search page using default options.
///
/// `limit` of 0 means all records. Records keep the order of the page.
///
/// # Example
///
/// ```rust
/// use rs_imagesearch::{extract, Phase};
///
/// let err = extract("<html>no data here</html>", 0).unwrap_err();
/// assert!(err.is_format_error());
/// assert_eq!(err.phase(), Some(Phase::Locate));
/// ```
pub fn extract(page: &str, limit: usize) -> Result<Vec<Record>> {
    extract_with_options(page, limit, &Options::default())
}

/// Extracts up to `limit` records from a search page with custom options.
pub fn extract_with_options(page: &str, limit: usize, options: &Options) -> Result<Vec<Record>> {
    extract_report(page, limit, options).map(|extraction| extraction.records)
}

/// Extracts records and reports how many entries were empty or malformed.
pub fn extract_report(page: &str, limit: usize, options: &Options) -> Result<Extraction> {
    extract::extract_report(page, limit, options)
}

/// Searches for `query` and returns up to `limit` records (0 = all found).
///
/// Performs one blocking HTTP request with default options.
pub fn images(query: &str, limit: usize, filters: &[Filter]) -> Result<Vec<Record>> {
    ImageSearch::new(Options::default())?.images(query, limit, filters)
}

/// Searches for `query` and returns up to `limit` image URLs (0 = all found).
pub fn urls(query: &str, limit: usize, filters: &[Filter]) -> Result<Vec<String>> {
    ImageSearch::new(Options::default())?.urls(query, limit, filters)
}

/// Searches for `query` and downloads up to `limit` images into `dir`.
pub fn download(query: &str, limit: usize, dir: impl AsRef<Path>, filters: &[Filter]) -> Result<DownloadReport> {
    ImageSearch::new(Options::default())?.download(query, limit, dir, filters)
}
