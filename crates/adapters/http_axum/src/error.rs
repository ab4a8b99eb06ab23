//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use powerhub_domain::error::{PowerHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps [`PowerHubError`] to an HTTP response with appropriate status code.
///
/// Device-reported errors are caller-correctable and map to 400; lookups
/// that missed map to 404; authentication and unexpected failures map to
/// 500 and are logged here, once, at the edge.
pub struct ApiError(PowerHubError);

impl From<PowerHubError> for ApiError {
    fn from(err: PowerHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PowerHubError::Validation(_) | PowerHubError::Device(_) => StatusCode::BAD_REQUEST,
            PowerHubError::NotFound(_) => StatusCode::NOT_FOUND,
            PowerHubError::Auth(err) => {
                tracing::error!(error = %err, "session acquisition failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PowerHubError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
