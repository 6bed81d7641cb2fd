//! View and like facts, and the outcomes of recording them.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `article_views` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleView {
    pub id: DbId,
    pub article_id: DbId,
    pub actor_key: String,
    pub user_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub ip_address: String,
    #[serde(skip_serializing)]
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `article_likes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleLike {
    pub id: DbId,
    pub article_id: DbId,
    pub actor_key: String,
    pub user_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub ip_address: String,
    #[serde(skip_serializing)]
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// Result of a view attempt. `counted` is false for repeat views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewOutcome {
    pub counted: bool,
    pub view_count: i64,
}

/// Like counter after a like or unlike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeCount {
    pub like_count: i64,
}
