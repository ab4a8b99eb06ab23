//! # powerhub-adapter-virtual
//!
//! Simulated PDU controller for testing and demonstration.
//!
//! Implements [`PduClient`] over an in-memory outlet bank: logins are
//! checked against configured credentials, switch commands mutate per-outlet
//! state, and snapshots report plausible electrical values. Behaviour that a
//! hardware-facing backend would delegate to the device — sessions, retries,
//! caching — is deliberately absent.
//!
//! ## Dependency rule
//!
//! Depends on `powerhub-app` (port trait) and `powerhub-domain` only.

use std::collections::HashMap;
use std::sync::Mutex;

use powerhub_app::ports::{Credentials, PduClient};
use powerhub_domain::action::OutletAction;
use powerhub_domain::error::PowerHubError;
use powerhub_domain::outlet::{Outlet, OutletKey};
use powerhub_domain::pdu::Pdu;

/// In-memory PDU bank implementing the controller port.
pub struct VirtualController {
    username: String,
    password: String,
    pdus: Vec<Pdu>,
    outlets: Mutex<HashMap<OutletKey, Outlet>>,
}

impl VirtualController {
    /// Create an empty bank that accepts the given credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            pdus: Vec::new(),
            outlets: Mutex::new(HashMap::new()),
        }
    }

    /// Add a simulated PDU with `outlet_count` outlets, all switched off.
    #[must_use]
    pub fn with_pdu(mut self, pdu_id: &str, outlet_count: u32) -> Self {
        self.pdus.push(Pdu {
            vendor: Some("powerhub".to_string()),
            model: Some("VPDU-1".to_string()),
            status: Some("on".to_string()),
            outlets: Some(outlet_count),
            current: Some(0.0),
            power: Some(0.0),
            alarm: Some("none".to_string()),
            ..Pdu::new(pdu_id)
        });

        let mut outlets = self.lock_outlets();
        for number in 1..=outlet_count {
            outlets.insert(
                OutletKey::new(pdu_id, number.to_string()),
                Outlet {
                    name: Some(format!("{pdu_id}_outlet{number}")),
                    status: Some("off".to_string()),
                    current: Some(0.0),
                    power: Some(0.0),
                    circuit: Some(format!("{pdu_id}:1A")),
                },
            );
        }
        drop(outlets);
        self
    }

    fn lock_outlets(&self) -> std::sync::MutexGuard<'_, HashMap<OutletKey, Outlet>> {
        self.outlets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for VirtualController {
    /// A two-PDU demo fleet guarded by `admin`/`admin`.
    fn default() -> Self {
        Self::new("admin", "admin")
            .with_pdu("power1", 8)
            .with_pdu("power2", 4)
    }
}

impl PduClient for VirtualController {
    async fn login(&self, credentials: &Credentials) -> Result<(), PowerHubError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(())
        } else {
            Err(PowerHubError::Auth(format!(
                "invalid credentials for {}",
                credentials.base_url
            )))
        }
    }

    async fn list_pdus(&self) -> Result<Vec<Pdu>, PowerHubError> {
        Ok(self.pdus.clone())
    }

    async fn status(
        &self,
        filter: Option<&[OutletKey]>,
    ) -> Result<HashMap<OutletKey, Outlet>, PowerHubError> {
        let outlets = self.lock_outlets();
        Ok(match filter {
            Some(keys) => keys
                .iter()
                .filter_map(|key| outlets.get(key).map(|outlet| (key.clone(), outlet.clone())))
                .collect(),
            None => outlets.clone(),
        })
    }

    async fn switch(&self, action: OutletAction, key: &OutletKey) -> Result<(), PowerHubError> {
        let mut outlets = self.lock_outlets();
        let outlet = outlets
            .get_mut(key)
            .ok_or_else(|| PowerHubError::Device(format!("no such outlet: {key}")))?;

        // A cycle ends with the outlet powered.
        let powered = !matches!(action, OutletAction::Off);
        outlet.status = Some(if powered { "on" } else { "off" }.to_string());
        outlet.current = Some(if powered { 0.4 } else { 0.0 });
        outlet.power = Some(if powered { 48.0 } else { 0.0 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            base_url: "https://localhost".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn should_accept_configured_credentials() {
        let controller = VirtualController::default();
        assert!(controller
            .login(&credentials("admin", "admin"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn should_reject_wrong_credentials() {
        let controller = VirtualController::default();
        let result = controller.login(&credentials("admin", "hunter2")).await;
        assert!(matches!(result, Err(PowerHubError::Auth(_))));
    }

    #[tokio::test]
    async fn should_list_configured_pdus() {
        let controller = VirtualController::default();
        let pdus = controller.list_pdus().await.unwrap();
        assert_eq!(pdus.len(), 2);
        assert_eq!(pdus[0].pdu_id, "power1");
        assert_eq!(pdus[0].outlets, Some(8));
    }

    #[tokio::test]
    async fn should_report_full_status_without_filter() {
        let controller = VirtualController::default();
        let status = controller.status(None).await.unwrap();
        assert_eq!(status.len(), 12);
    }

    #[tokio::test]
    async fn should_restrict_status_to_requested_keys() {
        let controller = VirtualController::default();
        let keys = [
            OutletKey::new("power1", "1"),
            OutletKey::new("power9", "1"), // unknown, silently dropped
        ];
        let status = controller.status(Some(&keys)).await.unwrap();
        assert_eq!(status.len(), 1);
        assert!(status.contains_key(&OutletKey::new("power1", "1")));
    }

    #[tokio::test]
    async fn should_turn_outlet_on_and_report_draw() {
        let controller = VirtualController::default();
        let key = OutletKey::new("power1", "3");

        controller.switch(OutletAction::On, &key).await.unwrap();

        let status = controller.status(Some(&[key.clone()])).await.unwrap();
        let outlet = &status[&key];
        assert_eq!(outlet.status.as_deref(), Some("on"));
        assert!(outlet.power.unwrap() > 0.0);
    }

    #[tokio::test]
    async fn should_leave_outlet_powered_after_cycle() {
        let controller = VirtualController::default();
        let key = OutletKey::new("power2", "2");

        controller.switch(OutletAction::Cycle, &key).await.unwrap();

        let status = controller.status(Some(&[key.clone()])).await.unwrap();
        assert_eq!(status[&key].status.as_deref(), Some("on"));
    }

    #[tokio::test]
    async fn should_turn_outlet_off() {
        let controller = VirtualController::default();
        let key = OutletKey::new("power1", "1");

        controller.switch(OutletAction::On, &key).await.unwrap();
        controller.switch(OutletAction::Off, &key).await.unwrap();

        let status = controller.status(Some(&[key.clone()])).await.unwrap();
        assert_eq!(status[&key].status.as_deref(), Some("off"));
        assert_eq!(status[&key].power, Some(0.0));
    }

    #[tokio::test]
    async fn should_report_device_error_for_unknown_outlet() {
        let controller = VirtualController::default();
        let result = controller
            .switch(OutletAction::On, &OutletKey::new("power1", "99"))
            .await;
        assert!(matches!(result, Err(PowerHubError::Device(_))));
    }
}
