//! Common error types used across the workspace.
//!
//! Each layer converts into [`PowerHubError`] via `#[from]`; adapters map
//! the variants onto their own surfaces (the HTTP adapter maps them to
//! status codes).

/// Top-level error for all powerhub operations.
#[derive(Debug, thiserror::Error)]
pub enum PowerHubError {
    /// The request itself is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup matched nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The controller rejected the credentials or no session could be
    /// established.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A domain error reported by the PDU controller. Caller-correctable:
    /// the request was understood but the device refused it.
    #[error("device error: {0}")]
    Device(String),

    /// Anything unexpected.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Validation failures for incoming requests.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A bulk request carried no outlet entries.
    #[error("\"outlets\" must be a non-empty array")]
    EmptyOutletList,

    /// The request body could not be parsed at all.
    #[error("invalid request body: {0}")]
    Body(String),
}

/// A lookup that matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// What kind of thing was looked up (`"PDU"`, `"Outlet"`, …).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}
