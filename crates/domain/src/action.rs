//! Outlet actions — the closed set of commands a controller accepts.

use serde::{Deserialize, Serialize};

/// An action applied to a single outlet.
///
/// The set is closed on purpose: dispatch goes through this enum rather
/// than through method lookup by name, so an unsupported action is rejected
/// at the edge instead of reaching the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutletAction {
    On,
    Off,
    /// Power-cycle: off, then back on.
    Cycle,
}

impl OutletAction {
    /// The wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Cycle => "cycle",
        }
    }
}

impl std::fmt::Display for OutletAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
