//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use powerhub_app::ports::PduClient;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API under `/api`, answers unmatched paths with a JSON 404, and
/// attaches a permissive CORS layer (the API is consumed from browser
/// dashboards on other origins) plus a [`TraceLayer`] that logs each HTTP
/// request/response through the `tracing` ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: PduClient + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", crate::api::routes())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Endpoint not found".to_string(),
        }),
    )
}
