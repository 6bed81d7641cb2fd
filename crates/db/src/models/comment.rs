//! Comment entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub article_id: DbId,
    pub author_name: String,
    pub email: Option<String>,
    pub body: String,
    pub is_anonymous: bool,
    /// Kept for moderation only.
    #[serde(skip_serializing)]
    pub ip_address: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for posting a comment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
    pub author_name: Option<String>,
    pub email: Option<String>,
    pub body: String,
    #[serde(default)]
    pub is_anonymous: bool,
}
