//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod outlets;
#[allow(clippy::missing_errors_doc)]
pub mod pdus;

use axum::Router;
use axum::routing::{get, post};

use powerhub_app::ports::PduClient;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Action routes are spelled out one per action — dispatch goes through
/// [`OutletAction`](powerhub_domain::action::OutletAction), so an
/// unsupported action name falls through to the 404 fallback instead of
/// reaching the controller. Literal segments (`on`, `off`, `cycle`) take
/// precedence over the `{pdu_id}` capture at the same position.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: PduClient + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::check::<C>))
        .route("/pdus", get(pdus::list::<C>))
        .route("/outlets", get(outlets::list::<C>))
        // Bulk actions, addressed by request body
        .route("/outlets/on", post(outlets::bulk_on::<C>))
        .route("/outlets/off", post(outlets::bulk_off::<C>))
        .route("/outlets/cycle", post(outlets::bulk_cycle::<C>))
        // Single outlets, addressed by path
        .route("/outlets/{pdu_id}/{outlet_number}", get(outlets::get::<C>))
        .route(
            "/outlets/{pdu_id}/{outlet_number}/on",
            post(outlets::turn_on::<C>),
        )
        .route(
            "/outlets/{pdu_id}/{outlet_number}/off",
            post(outlets::turn_off::<C>),
        )
        .route(
            "/outlets/{pdu_id}/{outlet_number}/cycle",
            post(outlets::cycle::<C>),
        )
}
