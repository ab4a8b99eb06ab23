//! JSON REST handlers for PDUs.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use powerhub_app::ports::PduClient;
use powerhub_domain::pdu::Pdu;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the list endpoint.
#[derive(Serialize)]
pub struct ListBody {
    pub pdus: Vec<Pdu>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/pdus`
pub async fn list<C>(State(state): State<AppState<C>>) -> Result<ListResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    let pdus = state.power_service.list_pdus().await?;
    Ok(ListResponse::Ok(Json(ListBody { pdus })))
}
