//! ANSI escape normalization
//!
//! Strips CSI escape sequences so the trackers match against plain text.
//! Pure and infallible; both trackers run this independently on each chunk.

use std::borrow::Cow;

use crate::patterns::CSI_SEQUENCE;

/// Strip CSI escape sequences (`ESC [ params letter`) from a chunk.
///
/// No other transformation is applied: no line splitting, no case changes.
/// Idempotent. A sequence truncated at a chunk boundary does not match and
/// stays in the text as literal characters; the trackers tolerate that.
pub fn strip_csi(text: &str) -> Cow<'_, str> {
    CSI_SEQUENCE.replace_all(text, "")
}
