//! Deduplicated views and likes.
//!
//! Each actor gets at most one counted view and one like per article. The
//! fact row is inserted with `ON CONFLICT DO NOTHING`, and the counter moves
//! only when this request's insert (or delete) actually happened, in the same
//! transaction. Concurrent requests from the same actor, even across server
//! processes, therefore move the counter exactly once.

use folio_core::error::CoreError;
use folio_core::identity::{ActorIdentity, ClientInfo};
use folio_core::types::DbId;
use sqlx::PgPool;

use super::{not_found, EngineResult};
use crate::models::engagement::{LikeCount, ViewOutcome};
use crate::repositories::{ArticleRepo, LikeRepo, ViewRepo};

/// Count a view unless this actor has already viewed the article.
///
/// Anonymous actors are accepted and keyed by address.
pub async fn record_view(
    pool: &PgPool,
    article_id: DbId,
    actor: &ActorIdentity,
    client: &ClientInfo,
) -> EngineResult<ViewOutcome> {
    let mut tx = pool.begin().await?;

    let article = ArticleRepo::find_by_id(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    let inserted = ViewRepo::insert_if_absent(&mut *tx, article_id, actor, client).await?;
    let outcome = match inserted {
        Some(_) => ViewOutcome {
            counted: true,
            view_count: ArticleRepo::increment_views(&mut *tx, article_id).await?,
        },
        None => ViewOutcome {
            counted: false,
            view_count: article.view_count,
        },
    };

    tx.commit().await?;
    tracing::debug!(article_id, counted = outcome.counted, "View recorded");
    Ok(outcome)
}

/// Like a published article. Requires an authenticated actor.
///
/// Fails with `Conflict` if the actor already likes it.
pub async fn like(
    pool: &PgPool,
    article_id: DbId,
    actor: &ActorIdentity,
    client: &ClientInfo,
) -> EngineResult<LikeCount> {
    let user_id = actor.require_user("like")?;
    let mut tx = pool.begin().await?;

    ArticleRepo::find_published(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    if LikeRepo::insert_if_absent(&mut *tx, article_id, actor, client)
        .await?
        .is_none()
    {
        return Err(CoreError::Conflict("Already liked by this user".to_string()).into());
    }
    let like_count = ArticleRepo::increment_likes(&mut *tx, article_id).await?;

    tx.commit().await?;
    tracing::info!(article_id, user_id, like_count, "Article liked");
    Ok(LikeCount { like_count })
}

/// Remove the actor's like. Requires an authenticated actor.
///
/// The counter is floored at zero even if it has drifted from the fact count.
pub async fn unlike(
    pool: &PgPool,
    article_id: DbId,
    actor: &ActorIdentity,
) -> EngineResult<LikeCount> {
    let user_id = actor.require_user("unlike")?;
    let mut tx = pool.begin().await?;

    ArticleRepo::find_published(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    if !LikeRepo::delete(&mut *tx, article_id, actor).await? {
        return Err(not_found("Like", article_id));
    }
    let like_count = ArticleRepo::decrement_likes(&mut *tx, article_id).await?;

    tx.commit().await?;
    tracing::info!(article_id, user_id, like_count, "Article unliked");
    Ok(LikeCount { like_count })
}

/// Whether the actor likes the article. Always `false` for anonymous actors.
pub async fn like_status(
    pool: &PgPool,
    article_id: DbId,
    actor: &ActorIdentity,
) -> EngineResult<bool> {
    if !actor.is_authenticated() {
        return Ok(false);
    }
    Ok(LikeRepo::exists(pool, article_id, actor).await?)
}
