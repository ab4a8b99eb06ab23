//! PDU — a power distribution unit as reported by the controller.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a PDU.
///
/// Every field except the identifier is optional: controllers report sparse
/// value maps, and an absent key becomes `null` on the wire rather than a
/// fabricated default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pdu {
    /// Controller-assigned identifier, e.g. `power1`.
    pub pdu_id: String,
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub status: Option<String>,
    /// Number of outlets on the unit.
    pub outlets: Option<u32>,
    /// Aggregate current draw, in amperes.
    pub current: Option<f64>,
    /// Aggregate power draw, in watts.
    pub power: Option<f64>,
    pub alarm: Option<String>,
}

impl Pdu {
    /// Create an empty snapshot carrying only the identifier.
    #[must_use]
    pub fn new(pdu_id: impl Into<String>) -> Self {
        Self {
            pdu_id: pdu_id.into(),
            vendor: None,
            model: None,
            status: None,
            outlets: None,
            current: None,
            power: None,
            alarm: None,
        }
    }
}
