//! Locating the embedded result data inside a search page.
//!
//! The results are injected as a script call of the form
//! `AF_initDataCallback({key: 'ds:1', hash: '2', data:[...], sideChannel: {}});`.
//! The locator carves the page down to the `[...]` array without looking at
//! its contents.

use std::borrow::Cow;

use crate::error::{Error, Phase, Result};
use crate::Options;

/// Isolate the JSON array embedded in `page`.
///
/// Uses the *last* occurrence of `options.marker`, since earlier injected
/// datasets carry the same marker. From there the block starts at the first
/// `[` and ends `options.trailing_trim` characters before the next
/// `options.script_close`. The slice is then HTML-unescaped against the
/// full named and numeric entity table.
///
/// The returned string always starts with `[`.
///
/// # Errors
///
/// Returns [`Error::ExtractionFormatError`] with [`Phase::Locate`] when the
/// marker, the opening `[`, or the closing marker cannot be found, or when
/// the trailing trim would cut into the array's opening.
///
/// # Example
///
/// ```rust
/// use rs_imagesearch::{locator, Options};
///
/// let page = "<script>AF_initDataCallback({key: 'ds:1', data:[1,[2]], sideChannel: {}});</script>";
/// let block = locator::locate(page, &Options::default())?;
/// assert_eq!(block, "[1,[2]]");
/// # Ok::<(), rs_imagesearch::Error>(())
/// ```
pub fn locate<'a>(page: &'a str, options: &Options) -> Result<Cow<'a, str>> {
    let Some(script_start) = page.rfind(options.marker.as_str()) else {
        return Err(not_found("data marker"));
    };
    let script = &page[script_start..];

    let Some(array_start) = script.find('[') else {
        return Err(not_found("opening '['"));
    };
    let block = &script[array_start..];

    let Some(close) = block.find(options.script_close.as_str()) else {
        return Err(not_found("closing script marker"));
    };

    let end = close
        .checked_sub(options.trailing_trim)
        .filter(|&end| end > 0 && block.is_char_boundary(end))
        .ok_or_else(|| {
            Error::format(
                Phase::Locate,
                format!(
                    "data block too short for trailing trim of {} characters",
                    options.trailing_trim
                ),
            )
        })?;

    tracing::debug!(offset = script_start + array_start, len = end, "located data block");

    Ok(html_escape::decode_html_entities(&block[..end]))
}

fn not_found(what: &str) -> Error {
    Error::format(Phase::Locate, format!("structure marker not found: {what}"))
}
