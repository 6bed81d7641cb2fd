//! Route definitions for the `/admin/articles` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/articles`.
///
/// All routes require an admin token (enforced by handler extractors).
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{id}                            -> get
/// PUT    /{id}                            -> propose_edit
/// DELETE /{id}                            -> delete
/// POST   /{id}/publish                    -> publish
/// POST   /{id}/unpublish                  -> unpublish
/// PUT    /{id}/publish-date               -> set_publish_date
/// GET    /{id}/versions                   -> list_versions
/// POST   /{id}/versions/{version_id}/apply -> apply_version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::list).post(admin::create))
        .route(
            "/{id}",
            get(admin::get)
                .put(admin::propose_edit)
                .delete(admin::delete),
        )
        .route("/{id}/publish", post(admin::publish))
        .route("/{id}/unpublish", post(admin::unpublish))
        .route("/{id}/publish-date", put(admin::set_publish_date))
        .route("/{id}/versions", get(admin::list_versions))
        .route(
            "/{id}/versions/{version_id}/apply",
            post(admin::apply_version),
        )
}
