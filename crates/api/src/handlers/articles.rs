//! Public article handlers: listing and reading published articles.

use axum::extract::{Path, Query, State};
use axum::Json;
use folio_core::types::DbId;
use folio_db::engine::catalog::{self, ArticleRead};
use folio_db::models::article::ArticlePage;

use crate::error::AppResult;
use crate::middleware::actor::Actor;
use crate::query::ListArticlesParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/articles
///
/// Published articles only, regardless of `published_only`.
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> AppResult<Json<DataResponse<ArticlePage>>> {
    let filter = params.into_filter(true)?;
    let page = catalog::list_articles(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/articles/{id}
///
/// Drafts are reported as 404. Each actor's first read counts as a view.
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<Json<DataResponse<ArticleRead>>> {
    let read = catalog::read_published(&state.pool, id, &actor.identity, &actor.client).await?;
    Ok(Json(DataResponse { data: read }))
}
