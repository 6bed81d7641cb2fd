//! Repositories for the `article_views` and `article_likes` fact tables.
//!
//! Inserts go through `ON CONFLICT ... DO NOTHING RETURNING id`: the unique
//! `(article_id, actor_key)` constraint decides who wins a race, and the
//! returned id tells the caller whether this request created the fact.

use folio_core::identity::{ActorIdentity, ClientInfo};
use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::engagement::{ArticleLike, ArticleView};

/// Column list shared by both fact tables.
const COLUMNS: &str = "id, article_id, actor_key, user_id, ip_address, user_agent, created_at";

/// Provides insert-if-absent and lookup operations for view facts.
pub struct ViewRepo;

impl ViewRepo {
    /// Record a view unless this actor already has one for the article.
    ///
    /// Returns the new fact id, or `None` for a repeat view.
    pub async fn insert_if_absent<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        actor: &ActorIdentity,
        client: &ClientInfo,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO article_views (article_id, actor_key, user_id, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_article_views_article_actor DO NOTHING \
             RETURNING id",
        )
        .bind(article_id)
        .bind(actor.actor_key())
        .bind(actor.user_id())
        .bind(&client.address)
        .bind(&client.user_agent)
        .fetch_optional(executor)
        .await
    }

    /// Number of view facts for an article.
    pub async fn count_for_article(pool: &PgPool, article_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article_views WHERE article_id = $1")
            .bind(article_id)
            .fetch_one(pool)
            .await
    }

    /// List view facts for an article, oldest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<ArticleView>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_views WHERE article_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ArticleView>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }
}

/// Provides insert-if-absent, delete, and lookup operations for like facts.
pub struct LikeRepo;

impl LikeRepo {
    /// Record a like unless this actor already has one for the article.
    ///
    /// Returns the new fact id, or `None` if the like already existed.
    pub async fn insert_if_absent<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        actor: &ActorIdentity,
        client: &ClientInfo,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO article_likes (article_id, actor_key, user_id, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_article_likes_article_actor DO NOTHING \
             RETURNING id",
        )
        .bind(article_id)
        .bind(actor.actor_key())
        .bind(actor.user_id())
        .bind(&client.address)
        .bind(&client.user_agent)
        .fetch_optional(executor)
        .await
    }

    /// Delete this actor's like. Returns `true` if a row was removed.
    pub async fn delete<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        actor: &ActorIdentity,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM article_likes WHERE article_id = $1 AND actor_key = $2")
                .bind(article_id)
                .bind(actor.actor_key())
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether this actor has liked the article.
    pub async fn exists<'e>(
        executor: impl PgExecutor<'e>,
        article_id: DbId,
        actor: &ActorIdentity,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM article_likes WHERE article_id = $1 AND actor_key = $2)",
        )
        .bind(article_id)
        .bind(actor.actor_key())
        .fetch_one(executor)
        .await
    }

    /// Number of like facts for an article.
    pub async fn count_for_article(pool: &PgPool, article_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article_likes WHERE article_id = $1")
            .bind(article_id)
            .fetch_one(pool)
            .await
    }

    /// List like facts for an article, oldest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<ArticleLike>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_likes WHERE article_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ArticleLike>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }
}
