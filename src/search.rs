//! Search facade: query URL, fetch, extract, download.

use std::path::Path;

use tracing::{info, warn};

use crate::download::{self, DownloadReport};
use crate::error::Result;
use crate::extract;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::filters::Filter;
use crate::query;
use crate::record::{Extraction, Record};
use crate::Options;

/// Image search client.
///
/// Each call performs one page fetch and is otherwise stateless, so a
/// client can be shared across threads when its fetcher can.
///
/// # Example
///
/// ```rust,no_run
/// use rs_imagesearch::filters::{Color, Filter};
/// use rs_imagesearch::{ImageSearch, Options};
///
/// let search = ImageSearch::new(Options::default())?;
/// for record in search.images("lighthouse", 5, &[Filter::from(Color::Blue)])? {
///     println!("{} (from {})", record.asset_url(), record.source_host());
/// }
/// # Ok::<(), rs_imagesearch::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImageSearch<F = HttpFetcher> {
    fetcher: F,
    options: Options,
}

impl ImageSearch<HttpFetcher> {
    /// Create a client that fetches over HTTP.
    pub fn new(options: Options) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self { fetcher, options })
    }
}

impl<F: Fetcher> ImageSearch<F> {
    /// Create a client with a custom fetcher.
    pub fn with_fetcher(fetcher: F, options: Options) -> Self {
        Self { fetcher, options }
    }

    /// The options this client was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The search URL for `query` and `filters`.
    #[must_use]
    pub fn query_url(&self, query: &str, filters: &[Filter]) -> String {
        query::build_query_url(&self.options.search_url, query, filters)
    }

    /// Fetch the results page and extract records, with counters.
    pub fn search(&self, query: &str, limit: usize, filters: &[Filter]) -> Result<Extraction> {
        let url = self.query_url(query, filters);
        let page = self.fetcher.fetch(&url)?;

        let extraction = extract::extract_report(&page, limit, &self.options).inspect_err(|e| {
            if e.is_format_error() {
                warn!(query, error = %e, "search page layout not recognised");
            }
        })?;

        info!(
            query,
            results = extraction.records.len(),
            candidates = extraction.candidates,
            "search finished"
        );
        Ok(extraction)
    }

    /// Search and return up to `limit` records (0 = all found).
    pub fn images(&self, query: &str, limit: usize, filters: &[Filter]) -> Result<Vec<Record>> {
        Ok(self.search(query, limit, filters)?.records)
    }

    /// Search and return up to `limit` asset URLs (0 = all found).
    pub fn urls(&self, query: &str, limit: usize, filters: &[Filter]) -> Result<Vec<String>> {
        Ok(self
            .images(query, limit, filters)?
            .into_iter()
            .map(|record| record.asset_url().to_string())
            .collect())
    }

    /// Search and download up to `limit` images into `dir`.
    ///
    /// Candidates that fail to download are replaced by the next result, so
    /// the report's `missing` is non-zero only when the page ran out of
    /// usable candidates. Files are named after the query with a numeric
    /// suffix; see [`download`](crate::download) for the naming rules and
    /// the note on concurrent use.
    pub fn download(
        &self,
        query: &str,
        limit: usize,
        dir: impl AsRef<Path>,
        filters: &[Filter],
    ) -> Result<DownloadReport> {
        let urls = self.urls(query, 0, filters)?;
        let stem = download::sanitize_stem(query);
        download::download_all(&self.fetcher, &urls, limit, dir.as_ref(), &stem)
    }
}
