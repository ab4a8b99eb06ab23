//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

use std::collections::HashMap;
use std::future::Future;

use powerhub_domain::action::OutletAction;
use powerhub_domain::error::PowerHubError;
use powerhub_domain::outlet::{Outlet, OutletKey};
use powerhub_domain::pdu::Pdu;

/// Connection settings for the PDU controller.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

/// Driven port for a session-authenticated power-management controller.
///
/// Implementations own the wire protocol, the credential/session lifecycle,
/// and whatever retry or caching discipline the hardware link needs. The
/// application core only sequences calls against this trait and never
/// serialises access itself.
pub trait PduClient {
    /// Establish (or refresh) an authenticated session.
    ///
    /// Called before every operation: the controller hands out short-lived
    /// sessions, so the service works with an always-fresh login rather
    /// than tracking session validity.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), PowerHubError>> + Send;

    /// Fetch snapshots of every PDU the controller manages.
    fn list_pdus(&self) -> impl Future<Output = Result<Vec<Pdu>, PowerHubError>> + Send;

    /// Fetch outlet status, optionally restricted to the given keys.
    ///
    /// With `None` the whole status map is returned. Requested keys the
    /// controller does not know are simply absent from the result — absence
    /// is the not-found signal, not an error.
    fn status(
        &self,
        filter: Option<&[OutletKey]>,
    ) -> impl Future<Output = Result<HashMap<OutletKey, Outlet>, PowerHubError>> + Send;

    /// Apply `action` to one outlet.
    fn switch(
        &self,
        action: OutletAction,
        key: &OutletKey,
    ) -> impl Future<Output = Result<(), PowerHubError>> + Send;
}
