pub mod admin;
pub mod articles;
pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/validate                                   echo token subject (auth)
///
/// /articles                                        list published
/// /articles/{id}                                   read published, records view
/// /articles/{id}/comments                          list, create
/// /articles/{id}/like                              like, unlike (auth)
/// /articles/{id}/like-status                       like status
///
/// /admin/articles                                  list all, create (admin only)
/// /admin/articles/{id}                             get with versions, propose edit, delete
/// /admin/articles/{id}/publish                     publish (POST)
/// /admin/articles/{id}/unpublish                   unpublish (POST)
/// /admin/articles/{id}/publish-date                set or clear override (PUT)
/// /admin/articles/{id}/versions                    version history
/// /admin/articles/{id}/versions/{vid}/apply        apply version (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/articles", articles::router())
        .nest("/admin/articles", admin::router())
}
