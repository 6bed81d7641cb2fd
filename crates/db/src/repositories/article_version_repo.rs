//! Repository for the `article_versions` table.
//!
//! Versions are append-only: the only update is [`ArticleVersionRepo::mark_applied`].

use folio_core::types::DbId;
use folio_core::versioning::EditableFields;
use sqlx::{PgExecutor, PgPool};

use crate::models::article_version::ArticleVersion;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, article_id, title, body, language, images, is_pending, created_at";

/// Provides append and lookup operations for article versions.
pub struct ArticleVersionRepo;

impl ArticleVersionRepo {
    /// Append a version snapshot for an article.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        fields: &EditableFields,
        is_pending: bool,
    ) -> Result<ArticleVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO article_versions (article_id, title, body, language, images, is_pending)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .bind(&fields.title)
            .bind(&fields.body)
            .bind(&fields.language)
            .bind(&fields.images)
            .bind(is_pending)
            .fetch_one(executor)
            .await
    }

    /// Find a version, scoped to the article that owns it.
    ///
    /// Returns `None` if the version does not exist or belongs to another article.
    pub async fn find_for_article<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        version_id: DbId,
    ) -> Result<Option<ArticleVersion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM article_versions WHERE id = $1 AND article_id = $2");
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(version_id)
            .bind(article_id)
            .fetch_optional(executor)
            .await
    }

    /// Flip a version from pending to applied. Returns `true` if a row changed.
    pub async fn mark_applied<'e>(
        executor: impl PgExecutor<'e>,
        version_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE article_versions SET is_pending = false WHERE id = $1 AND is_pending = true",
        )
        .bind(version_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List versions of an article, newest first. With `pending_only`, only
    /// proposed edits that have not been applied are returned.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
        pending_only: bool,
    ) -> Result<Vec<ArticleVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_versions
             WHERE article_id = $1 AND ($2 = false OR is_pending = true)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .bind(pending_only)
            .fetch_all(pool)
            .await
    }
}
