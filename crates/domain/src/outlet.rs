//! Outlet — a single switchable socket on a PDU.

use serde::{Deserialize, Serialize};

/// Composite key addressing one outlet: PDU id plus outlet number.
///
/// Both halves are strings as reported by the controller (outlet numbers are
/// opaque labels, not integers). The derived ordering — PDU id first, then
/// outlet number — is the canonical listing order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutletKey {
    pub pdu_id: String,
    pub outlet_number: String,
}

impl OutletKey {
    /// Create a key from its two halves.
    #[must_use]
    pub fn new(pdu_id: impl Into<String>, outlet_number: impl Into<String>) -> Self {
        Self {
            pdu_id: pdu_id.into(),
            outlet_number: outlet_number.into(),
        }
    }
}

impl std::fmt::Display for OutletKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.pdu_id, self.outlet_number)
    }
}

/// Read-only snapshot of an outlet's reported values.
///
/// Like [`Pdu`](crate::pdu::Pdu) snapshots, every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub name: Option<String>,
    pub status: Option<String>,
    /// Current draw, in amperes.
    pub current: Option<f64>,
    /// Power draw, in watts.
    pub power: Option<f64>,
    /// Circuit the outlet is wired to.
    pub circuit: Option<String>,
}
