//! Handlers for comments on published articles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::engine::comments;
use folio_db::models::comment::{Comment, CreateComment};

use crate::error::AppResult;
use crate::middleware::actor::Actor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/articles/{id}/comments
///
/// Oldest first. 404 for drafts and unknown articles.
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    let comments = comments::list_comments(&state.pool, id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/articles/{id}/comments
///
/// Open to anonymous visitors; the client address is kept for moderation.
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let comment = comments::create_comment(&state.pool, id, &input, &actor.client).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
