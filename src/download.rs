//! Asset downloading.
//!
//! Files are named `{stem}{n}.{ext}`, where `n` is the first number for
//! which no file `{stem}{n}.*` exists yet and `ext` comes from the sniffed
//! image type.
//!
//! The free-name probe is not atomic. Callers downloading into the same
//! directory from several threads or processes must serialize those
//! downloads themselves.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::sniff;
use crate::url_utils;

/// Outcome of a bulk download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Absolute paths of the files written, in candidate order.
    pub paths: Vec<PathBuf>,

    /// How many of the requested downloads could not be satisfied.
    pub missing: usize,

    /// Number of candidates whose download failed.
    pub failures: usize,
}

/// Turn free text into a file-name stem.
///
/// Keeps ASCII letters, digits, `-` and `_`; everything else becomes `_`.
///
/// # Examples
///
/// ```
/// use rs_imagesearch::download::sanitize_stem;
///
/// assert_eq!(sanitize_stem("red panda"), "red_panda");
/// assert_eq!(sanitize_stem("../.."), "image");
/// ```
#[must_use]
pub fn sanitize_stem(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Whether any file named `{stem}.*` exists in `dir`.
fn stem_taken(dir: &Path, stem: &str) -> io::Result<bool> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    let prefix = format!("{stem}.");
    for entry in entries {
        if entry?.file_name().to_string_lossy().starts_with(&prefix) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Find the first free `{stem}{suffix}` name in `dir`, starting at `*suffix`.
///
/// `suffix` is left at the number that was found, so repeated calls keep
/// counting up from there.
pub fn next_free_stem(dir: &Path, stem: &str, suffix: &mut usize) -> Result<String> {
    loop {
        let candidate = format!("{stem}{suffix}");
        if !stem_taken(dir, &candidate)? {
            return Ok(candidate);
        }
        *suffix += 1;
    }
}

/// Download one image into `dir` as `name.{ext}`.
///
/// Creates `dir` if needed and returns the absolute path written. An existing
/// file with the same name and extension is overwritten.
///
/// # Errors
///
/// - [`Error::TransportError`] if `url` is not an absolute http(s) URL or the
///   fetch fails.
/// - [`Error::InvalidImage`] if the body is not a recognised image.
/// - [`Error::IoError`] if the file cannot be written.
pub fn download_image<F: Fetcher>(fetcher: &F, url: &str, dir: &Path, name: &str) -> Result<PathBuf> {
    if !url_utils::is_absolute_url(url) {
        return Err(Error::transport(url, "not an absolute http(s) URL"));
    }

    let bytes = fetcher.fetch_bytes(url)?;
    let kind = sniff::sniff(&bytes).ok_or_else(|| Error::InvalidImage {
        url: url.to_string(),
    })?;

    fs::create_dir_all(dir)?;
    let path = fs::canonicalize(dir)?.join(format!("{name}.{}", kind.extension()));
    fs::write(&path, &bytes)?;

    debug!(url, path = %path.display(), mime = kind.mime(), "downloaded");
    Ok(path)
}

/// Download up to `limit` of `urls` into `dir`, trying candidates in order.
///
/// A failed candidate is skipped and the next one is tried for the same
/// slot. `limit` of 0 means every candidate. The report's `missing` counts
/// requested downloads that could not be satisfied.
///
/// # Errors
///
/// Only fails when `dir` cannot be created or probed; per-asset failures
/// are counted in the report.
pub fn download_all<F, S>(fetcher: &F, urls: &[S], limit: usize, dir: &Path, stem: &str) -> Result<DownloadReport>
where
    F: Fetcher,
    S: AsRef<str>,
{
    fs::create_dir_all(dir)?;

    let wanted = if limit == 0 { urls.len() } else { limit };
    let mut report = DownloadReport::default();
    let mut suffix = 0;

    for url in urls {
        if report.paths.len() >= wanted {
            break;
        }

        let url = url.as_ref();
        let name = next_free_stem(dir, stem, &mut suffix)?;
        match download_image(fetcher, url, dir, &name) {
            Ok(path) => report.paths.push(path),
            Err(e) => {
                warn!(url, error = %e, "download failed, trying next candidate");
                report.failures += 1;
            }
        }
    }

    report.missing = wanted - report.paths.len();
    info!(
        downloaded = report.paths.len(),
        missing = report.missing,
        failures = report.failures,
        "download finished"
    );

    Ok(report)
}
