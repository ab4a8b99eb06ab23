//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use powerhub_app::ports::PduClient;

use crate::state::AppState;

/// Body returned when a session could be established.
#[derive(Serialize)]
pub struct HealthyBody {
    pub status: &'static str,
    pub authenticated: bool,
}

/// Body returned when session acquisition failed.
#[derive(Serialize)]
pub struct UnhealthyBody {
    pub status: &'static str,
    pub error: String,
}

/// Possible responses from the health endpoint.
pub enum CheckResponse {
    Healthy,
    Unhealthy(String),
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Healthy => (
                StatusCode::OK,
                Json(HealthyBody {
                    status: "healthy",
                    authenticated: true,
                }),
            )
                .into_response(),
            Self::Unhealthy(error) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyBody {
                    status: "unhealthy",
                    error,
                }),
            )
                .into_response(),
        }
    }
}

/// `GET /api/health`
///
/// Attempts session acquisition and always answers with one of the two
/// documented shapes — errors are folded into the 503 body, never
/// propagated.
pub async fn check<C>(State(state): State<AppState<C>>) -> CheckResponse
where
    C: PduClient + Send + Sync + 'static,
{
    match state.power_service.check_session().await {
        Ok(()) => CheckResponse::Healthy,
        Err(err) => CheckResponse::Unhealthy(err.to_string()),
    }
}
