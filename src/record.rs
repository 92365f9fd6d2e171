//! Record types for extraction output.
//!
//! This module defines the typed records produced from a search page and
//! the per-call extraction report.

use serde::{Deserialize, Serialize};

/// One image search result.
///
/// Records are immutable once built and are emitted in the order the
/// entries appear upstream. All three fields are always non-empty.
///
/// ```text
/// Record {
///     asset_url:   "https://www.example.com/static/image.png",
///     source_url:  "https://www.example.com/article",
///     source_host: "example.com",
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    asset_url: String,
    source_url: String,
    source_host: String,
}

impl Record {
    /// Builds a record, rejecting empty fields.
    pub(crate) fn new(asset_url: &str, source_url: &str, source_host: &str) -> Option<Self> {
        if asset_url.is_empty() || source_url.is_empty() || source_host.is_empty() {
            return None;
        }
        Some(Self {
            asset_url: asset_url.to_string(),
            source_url: source_url.to_string(),
            source_host: source_host.to_string(),
        })
    }

    /// Direct URL of the image asset.
    #[must_use]
    pub fn asset_url(&self) -> &str {
        &self.asset_url
    }

    /// URL of the page the image was found on.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Host of the page the image was found on.
    #[must_use]
    pub fn source_host(&self) -> &str {
        &self.source_host
    }
}

/// Result of extracting records from one page, with counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in upstream order, truncated to the requested limit.
    pub records: Vec<Record>,

    /// Number of entries found in the upstream entry list.
    pub candidates: usize,

    /// Entries whose details slot was null (no image in that slot).
    pub empty_slots: usize,

    /// Entries dropped because their inner structure did not match.
    pub malformed: usize,

    /// Why each malformed entry was dropped, in entry order.
    pub dropped: Vec<DroppedEntry>,
}

/// An entry that was dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntry {
    /// Position of the entry in the upstream entry list.
    pub index: usize,

    /// The per-entry format error, rendered.
    pub reason: String,
}
