//! Article entity model and DTOs.

use folio_core::listing::SortKey;
use folio_core::publication::Publication;
use folio_core::types::{DbId, Timestamp};
use folio_core::versioning::{EditableFields, PartialFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub preview: String,
    pub language: String,
    pub images: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub first_published_at: Option<Timestamp>,
    pub publish_date_override: Option<Timestamp>,
    pub like_count: i64,
    pub comment_count: i64,
    pub view_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Article {
    /// The fields a version snapshot captures.
    pub fn editable_fields(&self) -> EditableFields {
        EditableFields {
            title: self.title.clone(),
            body: self.body.clone(),
            language: self.language.clone(),
            images: self.images.clone(),
        }
    }

    pub fn publication(&self) -> Publication {
        Publication {
            is_published: self.is_published,
            published_at: self.published_at,
            first_published_at: self.first_published_at,
        }
    }
}

/// DTO for creating a new (draft) article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub body: String,
    pub language: Option<String>,
    pub images: Option<Vec<String>>,
    pub publish_date_override: Option<Timestamp>,
}

/// DTO for proposing an edit. Omitted or blank fields keep their live values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProposeEdit {
    #[serde(flatten)]
    pub fields: PartialFields,
    pub publish_date_override: Option<Timestamp>,
}

/// Filter and page selection for article listings.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub published_only: bool,
    pub language: Option<String>,
    pub sort: SortKey,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One page of articles plus the total matching the filter.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub total_pages: i64,
}
