//! Validation and normalization for public comments.

use crate::error::CoreError;

/// Author name shown for comments posted without a name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Maximum length of a comment body, in characters.
pub const MAX_COMMENT_CHARS: usize = 5000;

/// Maximum length of an author name, in characters.
pub const MAX_AUTHOR_CHARS: usize = 100;

/// Resolve the stored author name and anonymity flag.
///
/// A blank name always produces an anonymous comment, regardless of the
/// flag the client sent.
pub fn resolve_author(author_name: Option<&str>, is_anonymous: bool) -> (String, bool) {
    match author_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) if !is_anonymous => (name.chars().take(MAX_AUTHOR_CHARS).collect(), false),
        _ => (ANONYMOUS_AUTHOR.to_string(), true),
    }
}

/// Validate a comment body.
pub fn validate_comment_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("comment body is required".to_string()));
    }
    if body.chars().count() > MAX_COMMENT_CHARS {
        return Err(CoreError::Validation(format!(
            "comment body must be at most {MAX_COMMENT_CHARS} characters"
        )));
    }
    Ok(())
}
