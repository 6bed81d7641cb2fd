//! Repository for the `articles` table.
//!
//! Every method runs exactly one statement and accepts any [`PgExecutor`], so
//! the engine can call them on a pool or inside a transaction (`&mut *tx`).
//! Counter methods apply deltas in SQL; callers never write a counter value
//! computed in memory.

use folio_core::publication::Publication;
use folio_core::types::{DbId, Timestamp};
use folio_core::versioning::EditableFields;
use sqlx::{PgExecutor, PgPool};

use crate::models::article::{Article, ArticleFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, preview, language, images, is_published, \
    published_at, first_published_at, publish_date_override, like_count, comment_count, \
    view_count, created_at, updated_at";

/// Shared `WHERE` clause for listings: `$1` = published only, `$2` = language.
const LIST_FILTER: &str = "($1 = false OR is_published = true) \
    AND ($2::TEXT IS NULL OR language = $2)";

/// Provides CRUD, publication, and counter operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    // ── Standard CRUD ────────────────────────────────────────────────

    /// Insert a new draft article.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        fields: &EditableFields,
        preview: &str,
        publish_date_override: Option<Timestamp>,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, body, preview, language, images, publish_date_override)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&fields.title)
            .bind(&fields.body)
            .bind(preview)
            .bind(&fields.language)
            .bind(&fields.images)
            .bind(publish_date_override)
            .fetch_one(executor)
            .await
    }

    /// Find an article by id, draft or published.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an article by id and lock its row until the transaction ends.
    ///
    /// Only meaningful inside a transaction.
    pub async fn find_by_id_for_update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a published article by id. Drafts are reported as absent.
    pub async fn find_published<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM articles WHERE id = $1 AND is_published = true");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Whether an article with the given id exists.
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// List one page of articles matching `filter`.
    ///
    /// `limit` and `offset` are taken as already clamped.
    pub async fn list(
        pool: &PgPool,
        filter: &ArticleFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE {LIST_FILTER}
             ORDER BY {}
             LIMIT $3 OFFSET $4",
            filter.sort.order_by()
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(filter.published_only)
            .bind(&filter.language)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all articles matching `filter`, ignoring paging.
    pub async fn count(pool: &PgPool, filter: &ArticleFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM articles WHERE {LIST_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.published_only)
            .bind(&filter.language)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete an article. Versions, facts and comments cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Content and publication ──────────────────────────────────────

    /// Overwrite the editable fields and preview.
    pub async fn update_content<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        fields: &EditableFields,
        preview: &str,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $2, body = $3, preview = $4, language = $5, images = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(&fields.body)
            .bind(preview)
            .bind(&fields.language)
            .bind(&fields.images)
            .fetch_optional(executor)
            .await
    }

    /// Update the live metadata an edit may change immediately: language,
    /// publish-date override, and the publication columns derived from them.
    pub async fn update_metadata<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        language: &str,
        publish_date_override: Option<Timestamp>,
        publication: Publication,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                language = $2, publish_date_override = $3,
                is_published = $4, published_at = $5, first_published_at = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(language)
            .bind(publish_date_override)
            .bind(publication.is_published)
            .bind(publication.published_at)
            .bind(publication.first_published_at)
            .fetch_optional(executor)
            .await
    }

    /// Write the publication columns.
    pub async fn set_publication<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        publication: Publication,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                is_published = $2, published_at = $3, first_published_at = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(publication.is_published)
            .bind(publication.published_at)
            .bind(publication.first_published_at)
            .fetch_optional(executor)
            .await
    }

    /// Write the publish-date override together with the publication columns.
    pub async fn set_publish_date_override<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        publish_date_override: Option<Timestamp>,
        publication: Publication,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                publish_date_override = $2, is_published = $3, published_at = $4,
                first_published_at = $5, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(publish_date_override)
            .bind(publication.is_published)
            .bind(publication.published_at)
            .bind(publication.first_published_at)
            .fetch_optional(executor)
            .await
    }

    // ── Counters ─────────────────────────────────────────────────────

    /// Add one to `view_count`, returning the new value.
    pub async fn increment_views<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }

    /// Add one to `like_count`, returning the new value.
    pub async fn increment_likes<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET like_count = like_count + 1 WHERE id = $1 RETURNING like_count",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }

    /// Subtract one from `like_count`, never going below zero.
    pub async fn decrement_likes<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET like_count = GREATEST(like_count - 1, 0) \
             WHERE id = $1 RETURNING like_count",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }

    /// Add one to `comment_count`, returning the new value.
    pub async fn increment_comments<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET comment_count = comment_count + 1 \
             WHERE id = $1 RETURNING comment_count",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }
}
