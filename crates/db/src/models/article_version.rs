//! Article version entity model.

use folio_core::types::{DbId, Timestamp};
use folio_core::versioning::EditableFields;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `article_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleVersion {
    pub id: DbId,
    pub article_id: DbId,
    pub title: String,
    pub body: String,
    pub language: String,
    pub images: Vec<String>,
    pub is_pending: bool,
    pub created_at: Timestamp,
}

impl ArticleVersion {
    pub fn fields(&self) -> EditableFields {
        EditableFields {
            title: self.title.clone(),
            body: self.body.clone(),
            language: self.language.clone(),
            images: self.images.clone(),
        }
    }
}
