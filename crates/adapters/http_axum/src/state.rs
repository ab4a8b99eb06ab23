//! Shared application state for axum handlers.

use std::sync::Arc;

use powerhub_app::ports::PduClient;
use powerhub_app::services::PowerService;

/// Application state shared across all axum handlers.
///
/// Generic over the client type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the client itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Power control service wrapping the PDU controller port.
    pub power_service: Arc<PowerService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            power_service: Arc::clone(&self.power_service),
        }
    }
}

impl<C: PduClient + Send + Sync + 'static> AppState<C> {
    /// Create a new application state from the service instance.
    pub fn new(power_service: PowerService<C>) -> Self {
        Self {
            power_service: Arc::new(power_service),
        }
    }
}
