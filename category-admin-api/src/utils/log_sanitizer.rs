//! Keeps large response bodies out of debug/error logs.

use std::borrow::Cow;

/// Bytes of a body kept in log output.
const MAX_LOGGED_BYTES: usize = 256;

/// Shorten `body` for a log line.
///
/// Bodies within the limit are borrowed unchanged. Longer ones are cut at the
/// last char boundary at or below the limit and suffixed with the full size.
pub fn truncate_for_log(body: &str) -> Cow<'_, str> {
    if body.len() <= MAX_LOGGED_BYTES {
        return Cow::Borrowed(body);
    }
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= MAX_LOGGED_BYTES)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}... ({} bytes)", &body[..cut], body.len()))
}
