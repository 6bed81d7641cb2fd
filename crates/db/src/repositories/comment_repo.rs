//! Repository for the `comments` table.

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::comment::Comment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, article_id, author_name, email, body, is_anonymous, ip_address, created_at, updated_at";

/// Provides insert and listing operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment. Author and body are expected to be validated already.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        author_name: &str,
        email: Option<&str>,
        body: &str,
        is_anonymous: bool,
        ip_address: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, author_name, email, body, is_anonymous, ip_address)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .bind(author_name)
            .bind(email)
            .bind(body)
            .bind(is_anonymous)
            .bind(ip_address)
            .fetch_one(executor)
            .await
    }

    /// List comments for an article, oldest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE article_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }

    /// Number of comments for an article.
    pub async fn count_for_article(pool: &PgPool, article_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE article_id = $1")
            .bind(article_id)
            .fetch_one(pool)
            .await
    }
}
