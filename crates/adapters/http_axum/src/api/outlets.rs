//! JSON REST handlers for outlets: listing, status, and switching.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use powerhub_app::ports::PduClient;
use powerhub_domain::action::OutletAction;
use powerhub_domain::error::ValidationError;
use powerhub_domain::outlet::{Outlet, OutletKey};

use crate::error::ApiError;
use crate::state::AppState;

/// One outlet row in list/get responses: the composite key plus the
/// snapshot values.
#[derive(Serialize)]
pub struct OutletBody {
    pub pdu_id: String,
    pub outlet_number: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub current: Option<f64>,
    pub power: Option<f64>,
    pub circuit: Option<String>,
}

impl OutletBody {
    fn new(key: OutletKey, outlet: Outlet) -> Self {
        Self {
            pdu_id: key.pdu_id,
            outlet_number: key.outlet_number,
            name: outlet.name,
            status: outlet.status,
            current: outlet.current,
            power: outlet.power,
            circuit: outlet.circuit,
        }
    }
}

/// Response body for the list endpoint.
#[derive(Serialize)]
pub struct ListBody {
    pub outlets: Vec<OutletBody>,
}

/// Query parameters accepted by the list endpoint.
#[derive(Deserialize)]
pub struct ListQuery {
    pub pdu_id: Option<String>,
    pub outlet_number: Option<String>,
}

/// Echo of an action applied to one outlet.
#[derive(Serialize)]
pub struct ActionBody {
    pub pdu_id: String,
    pub outlet_number: String,
    pub action: OutletAction,
    pub success: bool,
}

/// One entry of a bulk request. Both fields are optional at the parsing
/// level so a malformed entry is reported per item instead of failing the
/// whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_number: Option<String>,
}

/// Request body for bulk action endpoints.
#[derive(Deserialize)]
pub struct BulkRequest {
    pub outlets: Vec<OutletRef>,
}

/// Per-item failure in a bulk response.
#[derive(Serialize)]
#[serde(untagged)]
pub enum BulkError {
    /// The entry was missing one of its addressing fields; the original
    /// entry is echoed back under `outlet`.
    Malformed {
        outlet: OutletRef,
        error: &'static str,
    },
    /// The entry was well-formed but the action failed.
    Failed {
        pdu_id: String,
        outlet_number: String,
        error: String,
    },
}

/// Response body for bulk action endpoints. `errors` is omitted when every
/// entry succeeded.
#[derive(Serialize)]
pub struct BulkBody {
    pub results: Vec<ActionBody>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BulkError>,
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

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<OutletBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from single-outlet action endpoints.
pub enum ActionResponse {
    Ok(Json<ActionBody>),
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from bulk action endpoints.
pub enum BulkResponse {
    /// Every entry succeeded.
    Ok(Json<BulkBody>),
    /// At least one entry failed: 207 Multi-Status.
    Partial(Json<BulkBody>),
}

impl IntoResponse for BulkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Partial(json) => (StatusCode::MULTI_STATUS, json).into_response(),
        }
    }
}

/// `GET /api/outlets`
///
/// Optionally filtered by `pdu_id`, and by `outlet_number` when `pdu_id` is
/// also present. An empty parameter value counts as absent. Rows come back
/// sorted by composite key.
pub async fn list<C>(
    State(state): State<AppState<C>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    let pdu_id = query.pdu_id.as_deref().filter(|id| !id.is_empty());
    let outlet_number = query.outlet_number.as_deref().filter(|n| !n.is_empty());
    let outlets = state
        .power_service
        .list_outlets(pdu_id, outlet_number)
        .await?;

    Ok(ListResponse::Ok(Json(ListBody {
        outlets: outlets
            .into_iter()
            .map(|(key, outlet)| OutletBody::new(key, outlet))
            .collect(),
    })))
}

/// `GET /api/outlets/{pdu_id}/{outlet_number}`
pub async fn get<C>(
    State(state): State<AppState<C>>,
    Path((pdu_id, outlet_number)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    let key = OutletKey::new(pdu_id, outlet_number);
    let outlet = state.power_service.outlet_status(&key).await?;
    Ok(GetResponse::Ok(Json(OutletBody::new(key, outlet))))
}

/// `POST /api/outlets/{pdu_id}/{outlet_number}/on`
pub async fn turn_on<C>(
    State(state): State<AppState<C>>,
    Path((pdu_id, outlet_number)): Path<(String, String)>,
) -> Result<ActionResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    perform(&state, OutletAction::On, pdu_id, outlet_number).await
}

/// `POST /api/outlets/{pdu_id}/{outlet_number}/off`
pub async fn turn_off<C>(
    State(state): State<AppState<C>>,
    Path((pdu_id, outlet_number)): Path<(String, String)>,
) -> Result<ActionResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    perform(&state, OutletAction::Off, pdu_id, outlet_number).await
}

/// `POST /api/outlets/{pdu_id}/{outlet_number}/cycle`
pub async fn cycle<C>(
    State(state): State<AppState<C>>,
    Path((pdu_id, outlet_number)): Path<(String, String)>,
) -> Result<ActionResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    perform(&state, OutletAction::Cycle, pdu_id, outlet_number).await
}

/// `POST /api/outlets/on`
pub async fn bulk_on<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<BulkRequest>, JsonRejection>,
) -> Result<BulkResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    bulk(&state, OutletAction::On, payload).await
}

/// `POST /api/outlets/off`
pub async fn bulk_off<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<BulkRequest>, JsonRejection>,
) -> Result<BulkResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    bulk(&state, OutletAction::Off, payload).await
}

/// `POST /api/outlets/cycle`
pub async fn bulk_cycle<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<BulkRequest>, JsonRejection>,
) -> Result<BulkResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    bulk(&state, OutletAction::Cycle, payload).await
}

async fn perform<C>(
    state: &AppState<C>,
    action: OutletAction,
    pdu_id: String,
    outlet_number: String,
) -> Result<ActionResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    let key = OutletKey::new(pdu_id, outlet_number);
    state.power_service.apply(action, &key).await?;
    Ok(ActionResponse::Ok(Json(ActionBody {
        pdu_id: key.pdu_id,
        outlet_number: key.outlet_number,
        action,
        success: true,
    })))
}

/// Fan a bulk request out one entry at a time under a single session:
/// a login failure fails the whole request, while malformed or failing
/// entries are recorded and the rest of the batch proceeds.
async fn bulk<C>(
    state: &AppState<C>,
    action: OutletAction,
    payload: Result<Json<BulkRequest>, JsonRejection>,
) -> Result<BulkResponse, ApiError>
where
    C: PduClient + Send + Sync + 'static,
{
    let Json(request) =
        payload.map_err(|rejection| ValidationError::Body(rejection.body_text()))?;

    if request.outlets.is_empty() {
        return Err(ValidationError::EmptyOutletList.into());
    }

    let mut keys = Vec::new();
    let mut errors = Vec::new();

    for entry in request.outlets {
        let (Some(pdu_id), Some(outlet_number)) =
            (entry.pdu_id.clone(), entry.outlet_number.clone())
        else {
            errors.push(BulkError::Malformed {
                outlet: entry,
                error: "Missing pdu_id or outlet_number",
            });
            continue;
        };
        keys.push(OutletKey::new(pdu_id, outlet_number));
    }

    let outcomes = state.power_service.apply_many(action, keys).await?;

    let mut results = Vec::new();
    for (key, outcome) in outcomes {
        match outcome {
            Ok(()) => results.push(ActionBody {
                pdu_id: key.pdu_id,
                outlet_number: key.outlet_number,
                action,
                success: true,
            }),
            Err(err) => errors.push(BulkError::Failed {
                pdu_id: key.pdu_id,
                outlet_number: key.outlet_number,
                error: err.to_string(),
            }),
        }
    }

    let body = BulkBody { results, errors };
    if body.errors.is_empty() {
        Ok(BulkResponse::Ok(Json(body)))
    } else {
        Ok(BulkResponse::Partial(Json(body)))
    }
}
