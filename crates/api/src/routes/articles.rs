//! Route definitions for the public `/articles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{articles, comments, engagement};
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// Reads are open to anonymous visitors; liking requires a valid token
/// (enforced by the engine, which rejects anonymous actors with 401).
///
/// ```text
/// GET    /                        -> list_published
/// GET    /{id}                    -> read
/// GET    /{id}/comments           -> comments::list
/// POST   /{id}/comments           -> comments::create
/// POST   /{id}/like               -> like
/// DELETE /{id}/like               -> unlike
/// GET    /{id}/like-status        -> like_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list_published))
        .route("/{id}", get(articles::read))
        .route("/{id}/comments", get(comments::list).post(comments::create))
        .route("/{id}/like", post(engagement::like).delete(engagement::unlike))
        .route("/{id}/like-status", get(engagement::like_status))
}
