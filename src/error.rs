//! Error types for rs-imagesearch.
//!
//! This module defines the error types returned by search, extraction,
//! and download operations.

use std::fmt;

/// Pipeline phase in which an upstream structure check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Carving the embedded data block out of the page text.
    Locate,
    /// Walking the decoded tree down to the list of candidate entries.
    EntryList,
    /// Projecting a single candidate entry into a record.
    Entry,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Locate => "locate",
            Self::EntryList => "entry list",
            Self::Entry => "entry",
        };
        f.write_str(name)
    }
}

/// Error type for search, extraction, and download operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching a page or asset failed (network, timeout, non-2xx status).
    #[error("Request to {url} failed: {reason}")]
    TransportError {
        /// URL that was requested.
        url: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The embedded data did not have the expected shape.
    ///
    /// This is the signal that the upstream page layout moved.
    #[error("Upstream structure changed ({phase}): {detail}")]
    ExtractionFormatError {
        /// Phase that failed.
        phase: Phase,
        /// Which step failed and what was found instead.
        detail: String,
    },

    /// The located data block was not valid JSON.
    #[error("Embedded data is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Downloaded bytes were not a recognised image format.
    #[error("Not an image: {url}")]
    InvalidImage {
        /// URL the bytes came from.
        url: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn format(phase: Phase, detail: impl Into<String>) -> Self {
        Self::ExtractionFormatError {
            phase,
            detail: detail.into(),
        }
    }

    pub(crate) fn transport(url: &str, reason: impl fmt::Display) -> Self {
        Self::TransportError {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if this error means the upstream page structure changed.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::ExtractionFormatError { .. })
    }

    /// The failing phase, for format errors.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::ExtractionFormatError { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_is_classified() {
        let err = Error::format(Phase::Locate, "structure marker not found");
        assert!(err.is_format_error());
        assert_eq!(err.phase(), Some(Phase::Locate));
        assert_eq!(
            err.to_string(),
            "Upstream structure changed (locate): structure marker not found"
        );
    }

    #[test]
    fn other_errors_have_no_phase() {
        let err = Error::transport("https://example.com", "timed out");
        assert!(!err.is_format_error());
        assert_eq!(err.phase(), None);
        assert_eq!(err.to_string(), "Request to https://example.com failed: timed out");
    }
}
