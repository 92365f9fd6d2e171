//! Page and asset fetching.
//!
//! [`Fetcher`] is the seam between the search facade and the network. The
//! blocking [`HttpFetcher`] makes one GET per call with no retries; tests
//! and callers with their own transport implement the trait directly.

use std::time::Duration;

use tracing::debug;

use crate::encoding;
use crate::error::{Error, Result};
use crate::Options;

/// Source of page and asset bytes.
pub trait Fetcher {
    /// Fetch the raw body at `url`.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetch the body at `url` as text.
    ///
    /// The default decodes with the charset declared in the page, or UTF-8.
    fn fetch(&self, url: &str) -> Result<String> {
        let body = self.fetch_bytes(url)?;
        Ok(encoding::transcode_to_utf8(&body, None))
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch_bytes(url)
    }

    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher with a fixed client identifier and timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the request settings in `options`.
    pub fn new(options: &Options) -> Result<Self> {
        Self::with_settings(&options.user_agent, options.timeout)
    }

    /// Build a fetcher with an explicit client identifier and timeout.
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| Error::transport("<client>", e))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<(Vec<u8>, Option<String>)> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(url, format!("HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().map_err(|e| Error::transport(url, e))?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "fetched");

        Ok((body.to_vec(), content_type))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.get(url).map(|(body, _)| body)
    }

    fn fetch(&self, url: &str) -> Result<String> {
        let (body, content_type) = self.get(url)?;
        Ok(encoding::transcode_to_utf8(&body, content_type.as_deref()))
    }
}
