//! Public comments on published articles.

use folio_core::comments::{resolve_author, validate_comment_body};
use folio_core::identity::ClientInfo;
use folio_core::types::DbId;
use sqlx::PgPool;

use super::{not_found, EngineResult};
use crate::models::comment::{Comment, CreateComment};
use crate::repositories::{ArticleRepo, CommentRepo};

/// Post a comment and bump the article's comment counter in one transaction.
pub async fn create_comment(
    pool: &PgPool,
    article_id: DbId,
    input: &CreateComment,
    client: &ClientInfo,
) -> EngineResult<Comment> {
    validate_comment_body(&input.body)?;
    let (author_name, is_anonymous) =
        resolve_author(input.author_name.as_deref(), input.is_anonymous);
    let email = input
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let mut tx = pool.begin().await?;

    ArticleRepo::find_published(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    let comment = CommentRepo::create(
        &mut *tx,
        article_id,
        &author_name,
        email,
        input.body.trim(),
        is_anonymous,
        &client.address,
    )
    .await?;
    ArticleRepo::increment_comments(&mut *tx, article_id).await?;

    tx.commit().await?;
    tracing::info!(article_id, comment_id = comment.id, "Comment created");
    Ok(comment)
}

/// List comments on a published article, oldest first.
pub async fn list_comments(pool: &PgPool, article_id: DbId) -> EngineResult<Vec<Comment>> {
    ArticleRepo::find_published(pool, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;
    Ok(CommentRepo::list_by_article(pool, article_id).await?)
}
