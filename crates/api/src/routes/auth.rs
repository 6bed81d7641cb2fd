//! Route definitions for `/auth`.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// GET    /validate                -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", get(auth::validate))
}
