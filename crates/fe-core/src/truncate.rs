//! Bounded output for tool responses.
//!
//! Tool output is fed straight back into a model context window, so anything
//! a tool renders is passed through [`maybe_truncate`] before it leaves the
//! process.

use std::borrow::Cow;

/// Default upper bound on rendered tool output, in bytes.
pub const MAX_RESPONSE_LEN: usize = 16_000;

/// Marker appended to output that was cut at the length bound.
pub const TRUNCATED_MESSAGE: &str = "<response clipped><NOTE>To save on context only part of this file has been shown to you. You should retry this tool after you have searched inside the file with `grep -n` in order to find the line numbers of what you are looking for.</NOTE>";

/// Return `text` unchanged if it fits within `max_len` bytes, otherwise a
/// truncated copy with [`TRUNCATED_MESSAGE`] appended.
pub fn maybe_truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.len() <= max_len {
        return Cow::Borrowed(text);
    }

    // Back off to a char boundary so the cut never splits a code point.
    let mut cut = max_len;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    Cow::Owned(format!("{}{}", &text[..cut], TRUNCATED_MESSAGE))
}
