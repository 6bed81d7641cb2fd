//! Preview generation for article bodies.
//!
//! Lengths are measured in Unicode scalar values so a preview never splits a
//! multi-byte character.

/// Maximum number of characters kept from the body before truncation.
pub const PREVIEW_MAX_CHARS: usize = 200;

/// Appended to a preview whenever the body was truncated.
pub const ELLIPSIS: &str = "...";

/// Derive the stored preview for an article body.
///
/// Bodies of at most [`PREVIEW_MAX_CHARS`] characters are returned unchanged;
/// longer bodies keep their first [`PREVIEW_MAX_CHARS`] characters followed by
/// [`ELLIPSIS`].
pub fn summarize(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_MAX_CHARS) {
        None => body.to_string(),
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + ELLIPSIS.len());
            preview.push_str(&body[..cut]);
            preview.push_str(ELLIPSIS);
            preview
        }
    }
}
