//! Version ledger: pending edits, applying versions, and history.
//!
//! Proposing an edit never touches the live title, body or images; those
//! change only through [`apply_version`], which first snapshots the live
//! article as a historical version and then overwrites it, inside one
//! transaction. If anything fails between the two writes the whole apply
//! rolls back, so prior content is never lost.

use folio_core::summary::summarize;
use folio_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use super::{not_found, EngineResult};
use crate::models::article::{Article, ProposeEdit};
use crate::models::article_version::ArticleVersion;
use crate::repositories::{ArticleRepo, ArticleVersionRepo};

/// Result of [`propose_edit`]: the new pending version and the live article
/// (whose metadata may have changed).
#[derive(Debug, Clone, Serialize)]
pub struct ProposedEdit {
    pub version: ArticleVersion,
    pub article: Article,
}

/// Record an edit as a new pending version.
///
/// Each editable field takes the supplied value or, when omitted or blank,
/// the live value. A changed language or a supplied publish-date override is
/// written to the live article immediately (moving `published_at` when the
/// article is already published).
pub async fn propose_edit(
    pool: &PgPool,
    article_id: DbId,
    edit: &ProposeEdit,
) -> EngineResult<ProposedEdit> {
    let mut tx = pool.begin().await?;

    let article = ArticleRepo::find_by_id_for_update(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    let live = article.editable_fields();
    let proposed = live.merged_with(&edit.fields);
    let version = ArticleVersionRepo::create(&mut *tx, article_id, &proposed, true).await?;

    let language_change = live.language_change(&edit.fields);
    let article = if language_change.is_some() || edit.publish_date_override.is_some() {
        let language = language_change.unwrap_or(article.language.as_str());
        let publish_date_override = edit
            .publish_date_override
            .or(article.publish_date_override);
        let publication = article.publication().with_override(publish_date_override);
        ArticleRepo::update_metadata(
            &mut *tx,
            article_id,
            language,
            publish_date_override,
            publication,
        )
        .await?
        .ok_or_else(|| not_found("Article", article_id))?
    } else {
        article
    };

    tx.commit().await?;
    tracing::info!(article_id, version_id = version.id, "Pending version created");

    Ok(ProposedEdit { version, article })
}

/// Apply a version to the live article.
///
/// In one transaction: lock the article, snapshot its current fields as a
/// historical version, copy the target version's fields onto it, recompute
/// the preview, and mark the target version applied.
///
/// The target may also be a historical version, which restores an earlier
/// state of the article. It is already non-pending and stays that way.
pub async fn apply_version(
    pool: &PgPool,
    article_id: DbId,
    version_id: DbId,
) -> EngineResult<Article> {
    let mut tx = pool.begin().await?;

    let article = ArticleRepo::find_by_id_for_update(&mut *tx, article_id)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;
    let target = ArticleVersionRepo::find_for_article(&mut *tx, article_id, version_id)
        .await?
        .ok_or_else(|| not_found("ArticleVersion", version_id))?;

    // Snapshot before overwrite.
    let snapshot =
        ArticleVersionRepo::create(&mut *tx, article_id, &article.editable_fields(), false)
            .await?;

    let fields = target.fields();
    let preview = summarize(&fields.body);
    let updated = ArticleRepo::update_content(&mut *tx, article_id, &fields, &preview)
        .await?
        .ok_or_else(|| not_found("Article", article_id))?;

    let was_pending = ArticleVersionRepo::mark_applied(&mut *tx, version_id).await?;

    tx.commit().await?;
    tracing::info!(
        article_id,
        version_id,
        snapshot_id = snapshot.id,
        was_pending,
        "Version applied"
    );

    Ok(updated)
}

/// List an article's versions, newest first.
pub async fn list_versions(
    pool: &PgPool,
    article_id: DbId,
    pending_only: bool,
) -> EngineResult<Vec<ArticleVersion>> {
    if !ArticleRepo::exists(pool, article_id).await? {
        return Err(not_found("Article", article_id));
    }
    Ok(ArticleVersionRepo::list_by_article(pool, article_id, pending_only).await?)
}
