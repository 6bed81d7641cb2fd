//! Handlers for the `/admin/articles` resource.
//!
//! Every handler takes [`RequireAdmin`]. Drafts are visible here, and edits
//! go through the version ledger: `PUT /{id}` only proposes a version, which
//! reaches the live article through `POST /{id}/versions/{vid}/apply`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::publication::parse_publish_date;
use folio_core::types::DbId;
use folio_core::versioning::PartialFields;
use folio_db::engine::ledger::{self, ProposedEdit};
use folio_db::engine::{catalog, publication};
use folio_db::models::article::{Article, ArticlePage, CreateArticle, ProposeEdit};
use folio_db::models::article_version::ArticleVersion;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{ListArticlesParams, VersionListParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating an article.
///
/// `publish_date` accepts `YYYY-MM-DDTHH:MM` (UTC) or RFC 3339.
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    pub language: Option<String>,
    pub images: Option<Vec<String>>,
    pub publish_date: Option<String>,
}

/// Request body for proposing an edit. Omitted or blank fields keep their
/// live values.
#[derive(Debug, Default, Deserialize)]
pub struct ProposeEditRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub language: Option<String>,
    pub images: Option<Vec<String>>,
    pub publish_date: Option<String>,
}

/// Request body for `PUT /{id}/publish-date`. `null` or blank clears the override.
#[derive(Debug, Deserialize)]
pub struct SetPublishDateRequest {
    pub publish_date: Option<String>,
}

/// An article together with its version history, newest first.
#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub versions: Vec<ArticleVersion>,
}

/// GET /api/v1/admin/articles
///
/// All articles, drafts included, unless `published_only=true`.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> AppResult<Json<DataResponse<ArticlePage>>> {
    let filter = params.into_filter(false)?;
    let page = catalog::list_articles(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/admin/articles
///
/// Creates a draft. Returns 201.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateArticleRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Article>>)> {
    let create = CreateArticle {
        title: input.title,
        body: input.body,
        language: input.language,
        images: input.images,
        publish_date_override: parse_publish_date(input.publish_date.as_deref())?,
    };
    let article = catalog::create_article(&state.pool, &create).await?;
    tracing::info!(article_id = article.id, admin_id = admin.user_id, "Admin created article");
    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /api/v1/admin/articles/{id}
pub async fn get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ArticleDetail>>> {
    let article = catalog::get_article(&state.pool, id).await?;
    let versions = ledger::list_versions(&state.pool, id, false).await?;
    Ok(Json(DataResponse {
        data: ArticleDetail { article, versions },
    }))
}

/// PUT /api/v1/admin/articles/{id}
///
/// Records a pending version. Language and publish date apply to the live
/// article immediately; title, body and images wait for an apply.
pub async fn propose_edit(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProposeEditRequest>,
) -> AppResult<Json<DataResponse<ProposedEdit>>> {
    let edit = ProposeEdit {
        fields: PartialFields {
            title: input.title,
            body: input.body,
            language: input.language,
            images: input.images,
        },
        publish_date_override: parse_publish_date(input.publish_date.as_deref())?,
    };
    let proposed = ledger::propose_edit(&state.pool, id, &edit).await?;
    Ok(Json(DataResponse { data: proposed }))
}

/// DELETE /api/v1/admin/articles/{id}
///
/// Removes the article with its versions, comments, views and likes.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    catalog::delete_article(&state.pool, id).await?;
    tracing::info!(article_id = id, admin_id = admin.user_id, "Admin deleted article");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/articles/{id}/publish
pub async fn publish(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = publication::publish(&state.pool, id).await?;
    Ok(Json(DataResponse { data: article }))
}

/// POST /api/v1/admin/articles/{id}/unpublish
pub async fn unpublish(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = publication::unpublish(&state.pool, id).await?;
    Ok(Json(DataResponse { data: article }))
}

/// PUT /api/v1/admin/articles/{id}/publish-date
pub async fn set_publish_date(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPublishDateRequest>,
) -> AppResult<Json<DataResponse<Article>>> {
    let override_at = parse_publish_date(input.publish_date.as_deref())?;
    let article = publication::set_publish_date_override(&state.pool, id, override_at).await?;
    Ok(Json(DataResponse { data: article }))
}

/// GET /api/v1/admin/articles/{id}/versions
pub async fn list_versions(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<VersionListParams>,
) -> AppResult<Json<DataResponse<Vec<ArticleVersion>>>> {
    let versions = ledger::list_versions(&state.pool, id, params.pending_only).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// POST /api/v1/admin/articles/{id}/versions/{version_id}/apply
///
/// Snapshots the live content as a historical version, then copies the
/// target version onto the article.
pub async fn apply_version(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path((id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = ledger::apply_version(&state.pool, id, version_id).await?;
    Ok(Json(DataResponse { data: article }))
}
