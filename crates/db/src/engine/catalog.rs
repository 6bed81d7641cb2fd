//! Article creation, reads, listing, and deletion.

use folio_core::identity::{ActorIdentity, ClientInfo};
use folio_core::listing::{clamp_limit, clamp_offset, total_pages, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use folio_core::summary::summarize;
use folio_core::types::DbId;
use folio_core::versioning::{
    language_or_default, normalize_images, validate_new_article, EditableFields,
};
use serde::Serialize;
use sqlx::PgPool;

use super::{engagement, not_found, EngineResult};
use crate::models::article::{Article, ArticleFilter, ArticlePage, CreateArticle};
use crate::repositories::ArticleRepo;

/// A public read of an article, with whether this read counted as a view.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRead {
    pub article: Article,
    pub view_counted: bool,
}

/// Create a draft article. Title and body are required.
pub async fn create_article(pool: &PgPool, input: &CreateArticle) -> EngineResult<Article> {
    validate_new_article(&input.title, &input.body)?;

    let fields = EditableFields {
        title: input.title.trim().to_string(),
        body: input.body.clone(),
        language: language_or_default(input.language.as_deref()),
        images: input
            .images
            .as_deref()
            .map(normalize_images)
            .unwrap_or_default(),
    };
    let preview = summarize(&fields.body);

    let article =
        ArticleRepo::create(pool, &fields, &preview, input.publish_date_override).await?;
    tracing::info!(article_id = article.id, "Article created");
    Ok(article)
}

/// Fetch any article, draft or published.
pub async fn get_article(pool: &PgPool, article_id: DbId) -> EngineResult<Article> {
    ArticleRepo::find_by_id(pool, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))
}

/// Public read: drafts are invisible, and the read is recorded as a view.
pub async fn read_published(
    pool: &PgPool,
    article_id: DbId,
    actor: &ActorIdentity,
    client: &ClientInfo,
) -> EngineResult<ArticleRead> {
    let mut article = ArticleRepo::find_published(pool, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    let outcome = engagement::record_view(pool, article_id, actor, client).await?;
    article.view_count = outcome.view_count;

    Ok(ArticleRead {
        article,
        view_counted: outcome.counted,
    })
}

/// List a page of articles.
pub async fn list_articles(pool: &PgPool, filter: &ArticleFilter) -> EngineResult<ArticlePage> {
    let limit = clamp_limit(filter.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(filter.offset);

    let items = ArticleRepo::list(pool, filter, limit, offset).await?;
    let total = ArticleRepo::count(pool, filter).await?;

    Ok(ArticlePage {
        items,
        total,
        limit,
        offset,
        total_pages: total_pages(total, limit),
    })
}

/// Delete an article together with its versions, comments, views and likes.
pub async fn delete_article(pool: &PgPool, article_id: DbId) -> EngineResult<()> {
    if !ArticleRepo::delete(pool, article_id).await? {
        return Err(not_found("Article", article_id));
    }
    tracing::info!(article_id, "Article deleted");
    Ok(())
}
