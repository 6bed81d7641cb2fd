//! Liveness endpoint for load balancers and deploy checks.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// The process is serving but PostgreSQL did not answer.
    Degraded,
}

impl HealthStatus {
    fn from_database(db_healthy: bool) -> Self {
        if db_healthy {
            Self::Ok
        } else {
            Self::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Always 200 so the process stays in rotation; callers read `status`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match folio_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: HealthStatus::from_database(db_healthy),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `GET /health`, mounted outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_degrades_status() {
        assert_eq!(HealthStatus::from_database(true), HealthStatus::Ok);
        assert_eq!(HealthStatus::from_database(false), HealthStatus::Degraded);
    }

    #[test]
    fn status_serializes_lowercase() {
        let body = serde_json::to_value(HealthResponse {
            status: HealthStatus::Degraded,
            version: "0.0.0",
            db_healthy: false,
        })
        .unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["db_healthy"], false);
    }
}
