//! Extraction pipeline: locate, decode, navigate, project, truncate.
//!
//! The decoded data is an untyped, positionally addressed tree. The paths
//! below are the only place its layout is described; when upstream moves
//! things, this is the one file to update.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Phase, Result};
use crate::navigate::Step::{Index, Key};
use crate::navigate::{self, PathError, Step};
use crate::record::{DroppedEntry, Extraction, Record};
use crate::{locator, Options};

/// Map key under which an entry keeps its result payload.
///
/// Has no name upstream. Consulted by [`ENTRY_DETAILS`].
pub const RESULT_KEY: &str = "444383007";

/// Map key under which the details keep source page information.
pub const SOURCE_KEY: &str = "2003";

/// Root of the decoded array down to the ordered list of candidate entries.
pub const ENTRY_LIST: &[Step] = &[Index(56), Index(1), Index(0), Index(0), Index(1), Index(0)];

/// Entry down to its details slot. A null slot means "no image here".
pub const ENTRY_DETAILS: &[Step] = &[Index(0), Index(0), Key(RESULT_KEY), Index(1)];

/// Details down to the asset URL.
pub const ASSET_URL: &[Step] = &[Index(3), Index(0)];

/// Details down to the source page URL.
pub const SOURCE_URL: &[Step] = &[Index(9), Key(SOURCE_KEY), Index(2)];

/// Details down to the source page host.
pub const SOURCE_HOST: &[Step] = &[Index(9), Key(SOURCE_KEY), Index(17)];

fn record_fields(
    details: &Value,
) -> std::result::Result<(&str, &str, &str), (&'static str, PathError)> {
    let asset = navigate::get_str(details, ASSET_URL).map_err(|e| ("asset url", e))?;
    let source = navigate::get_str(details, SOURCE_URL).map_err(|e| ("source url", e))?;
    let host = navigate::get_str(details, SOURCE_HOST).map_err(|e| ("source host", e))?;
    Ok((asset, source, host))
}

/// Project one entry: `Ok(None)` for a null details slot, an
/// [`Phase::Entry`] format error when the entry's shape does not match.
fn project_entry(entry: &Value) -> Result<Option<Record>> {
    let details = match navigate::get(entry, ENTRY_DETAILS) {
        Ok(Value::Null) => return Ok(None),
        Ok(details) => details,
        Err(e) => return Err(Error::format(Phase::Entry, format!("details {e}"))),
    };

    let (asset, source, host) =
        record_fields(details).map_err(|(field, e)| Error::format(Phase::Entry, format!("{field} {e}")))?;

    Record::new(asset, source, host)
        .map(Some)
        .ok_or_else(|| Error::format(Phase::Entry, "empty field"))
}

/// Walk a decoded tree and collect records.
///
/// Entries with a null details slot are skipped; entries whose inner shape
/// does not match are dropped and listed in [`Extraction::dropped`].
/// Neither aborts the call.
///
/// # Errors
///
/// Returns [`Error::ExtractionFormatError`] with [`Phase::EntryList`] when
/// the entry list cannot be reached.
pub fn extract_from_tree(tree: &Value, limit: usize) -> Result<Extraction> {
    let entries = navigate::get_array(tree, ENTRY_LIST).map_err(|e| {
        warn!(error = %e, "entry list not found, upstream layout may have changed");
        Error::format(Phase::EntryList, e.to_string())
    })?;

    let mut extraction = Extraction {
        candidates: entries.len(),
        ..Extraction::default()
    };

    for (i, entry) in entries.iter().enumerate() {
        match project_entry(entry) {
            Ok(Some(record)) => extraction.records.push(record),
            Ok(None) => {
                extraction.empty_slots += 1;
            }
            Err(e) => {
                debug!(entry = i, error = %e, "dropping malformed entry");
                extraction.malformed += 1;
                extraction.dropped.push(DroppedEntry {
                    index: i,
                    reason: e.to_string(),
                });
            }
        }
    }

    if limit > 0 {
        extraction.records.truncate(limit);
    }

    debug!(
        candidates = extraction.candidates,
        empty = extraction.empty_slots,
        malformed = extraction.malformed,
        emitted = extraction.records.len(),
        "extraction finished"
    );

    Ok(extraction)
}

/// Run the full pipeline over a page and report counters.
///
/// `limit` of 0 means unbounded.
///
/// # Errors
///
/// - [`Error::ExtractionFormatError`] when the data block cannot be located
///   or the entry list cannot be reached.
/// - [`Error::DecodeError`] when the located block is not valid JSON.
pub fn extract_report(page: &str, limit: usize, options: &Options) -> Result<Extraction> {
    let block = locator::locate(page, options)?;
    let tree: Value = serde_json::from_str(&block)?;
    extract_from_tree(&tree, limit)
}
