//! Draft/published transitions.
//!
//! The transition rules live in [`folio_core::publication`]; these functions
//! lock the article row, compute the next state, and write it back in one
//! transaction.

use chrono::Utc;
use folio_core::publication::Publication;
use folio_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use super::{not_found, EngineResult};
use crate::models::article::Article;
use crate::repositories::ArticleRepo;

/// Publish an article. See [`Publication::publish`] for the timestamp rule.
pub async fn publish(pool: &PgPool, article_id: DbId) -> EngineResult<Article> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let article = ArticleRepo::find_by_id_for_update(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;
    let next = article
        .publication()
        .publish(article.publish_date_override, now);

    let article = ArticleRepo::set_publication(&mut *tx, article_id, next)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    tx.commit().await?;
    tracing::info!(article_id, published_at = ?article.published_at, "Article published");
    Ok(article)
}

/// Return an article to draft and clear its publish timestamp.
pub async fn unpublish(pool: &PgPool, article_id: DbId) -> EngineResult<Article> {
    let article = ArticleRepo::set_publication(pool, article_id, Publication::draft())
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;
    tracing::info!(article_id, "Article unpublished");
    Ok(article)
}

/// Set or clear the publish-date override.
///
/// A published article's effective timestamp moves to the new date at once;
/// clearing the override returns it to the moment the article went live.
pub async fn set_publish_date_override(
    pool: &PgPool,
    article_id: DbId,
    publish_date_override: Option<Timestamp>,
) -> EngineResult<Article> {
    let mut tx = pool.begin().await?;

    let article = ArticleRepo::find_by_id_for_update(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;
    let next = article.publication().with_override(publish_date_override);

    let article =
        ArticleRepo::set_publish_date_override(&mut *tx, article_id, publish_date_override, next)
            .await?
            .ok_or_else(|| not_found("Article", article_id))?;

    tx.commit().await?;
    tracing::info!(article_id, ?publish_date_override, "Publish date override updated");
    Ok(article)
}
