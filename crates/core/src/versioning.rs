//! Rules for building article versions from partial edits.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Language tag assigned when none is supplied.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Maximum length of an article title, in characters.
pub const MAX_TITLE_CHARS: usize = 300;

/// The fields of an article that versions snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableFields {
    pub title: String,
    pub body: String,
    pub language: String,
    pub images: Vec<String>,
}

/// An edit request. `None`, blank strings and empty image lists all mean
/// "keep the current value", so omitting a field never clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialFields {
    pub title: Option<String>,
    pub body: Option<String>,
    pub language: Option<String>,
    pub images: Option<Vec<String>>,
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl PartialFields {
    /// The requested language, if one was supplied.
    pub fn language(&self) -> Option<&str> {
        supplied(&self.language)
    }

    fn images(&self) -> Option<Vec<String>> {
        self.images
            .as_deref()
            .map(normalize_images)
            .filter(|images| !images.is_empty())
    }
}

impl EditableFields {
    /// Build the field values of a new version: each supplied field wins,
    /// everything else is copied from `self`.
    pub fn merged_with(&self, edit: &PartialFields) -> Self {
        Self {
            title: supplied(&edit.title)
                .map(str::to_string)
                .unwrap_or_else(|| self.title.clone()),
            // Bodies keep their whitespace; only an all-blank body is "omitted".
            body: edit
                .body
                .as_ref()
                .filter(|b| !b.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| self.body.clone()),
            language: edit
                .language()
                .map(str::to_string)
                .unwrap_or_else(|| self.language.clone()),
            images: edit.images().unwrap_or_else(|| self.images.clone()),
        }
    }

    /// The new language if `edit` changes it.
    pub fn language_change<'a>(&self, edit: &'a PartialFields) -> Option<&'a str> {
        edit.language().filter(|lang| *lang != self.language)
    }
}

/// Resolve the language of a new article.
pub fn language_or_default(language: Option<&str>) -> String {
    language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

/// Trim image references and drop blank entries, preserving order.
pub fn normalize_images(images: &[String]) -> Vec<String> {
    images
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate the required fields of a new article.
pub fn validate_new_article(title: &str, body: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    if body.trim().is_empty() {
        return Err(CoreError::Validation("body is required".to_string()));
    }
    Ok(())
}
