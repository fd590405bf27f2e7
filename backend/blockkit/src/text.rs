//! Text clean-up applied before anything lands in a Slack text field.

use std::borrow::Cow;

/// Decode HTML entities, then keep at most `limit` characters.
///
/// Decoding follows the HTML5 rules: legacy entities such as `&lt` also
/// expand without a semicolon, and invalid numeric references become
/// U+FFFD. Truncation counts Unicode scalar values, so a multi-byte character is
/// never split.
pub fn sanitize(text: &str, limit: usize) -> String {
    let decoded = htmlize::unescape(text);
    truncate_chars(decoded, limit)
}

fn truncate_chars(text: Cow<'_, str>, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            tracing::debug!(
                original_chars = text.chars().count(),
                limit,
                "Truncating text to Slack section limit"
            );
            text[..cut].to_string()
        }
        None => text.into_owned(),
    }
}
