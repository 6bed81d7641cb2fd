//! Like handlers. Views are recorded by the article read handler.

use axum::extract::{Path, State};
use axum::Json;
use folio_core::types::DbId;
use folio_db::engine::engagement;
use folio_db::models::engagement::LikeCount;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::actor::Actor;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LikeStatus {
    pub liked: bool,
}

/// POST /api/v1/articles/{id}/like
///
/// 401 for anonymous actors, 409 if already liked.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<Json<DataResponse<LikeCount>>> {
    let count = engagement::like(&state.pool, id, &actor.identity, &actor.client).await?;
    Ok(Json(DataResponse { data: count }))
}

/// DELETE /api/v1/articles/{id}/like
///
/// 401 for anonymous actors, 404 if there is no like to remove.
pub async fn unlike(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<Json<DataResponse<LikeCount>>> {
    let count = engagement::unlike(&state.pool, id, &actor.identity).await?;
    Ok(Json(DataResponse { data: count }))
}

/// GET /api/v1/articles/{id}/like-status
pub async fn like_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<Json<DataResponse<LikeStatus>>> {
    let liked = engagement::like_status(&state.pool, id, &actor.identity).await?;
    Ok(Json(DataResponse {
        data: LikeStatus { liked },
    }))
}
