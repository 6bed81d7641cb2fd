//! Token introspection for clients of the external auth service.

use axum::Json;
use folio_core::types::DbId;
use serde::Serialize;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct TokenInfo {
    pub user_id: DbId,
    pub is_admin: bool,
}

/// GET /api/v1/auth/validate
///
/// 200 with the token's subject when the bearer token is valid, 401 otherwise.
pub async fn validate(user: AuthUser) -> Json<DataResponse<TokenInfo>> {
    Json(DataResponse {
        data: TokenInfo {
            user_id: user.user_id,
            is_admin: user.is_admin,
        },
    })
}
