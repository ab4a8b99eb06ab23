//! Power service — use-cases for querying and switching PDU outlets.

use powerhub_domain::action::OutletAction;
use powerhub_domain::error::{NotFoundError, PowerHubError};
use powerhub_domain::outlet::{Outlet, OutletKey};
use powerhub_domain::pdu::Pdu;

use crate::ports::{Credentials, PduClient};

/// Application service wrapping the PDU controller port.
///
/// Owns the connection settings and re-authenticates on every operation.
/// The controller hands out short-lived sessions, so each request starts
/// from a fresh login; a failed login fails only that request and no state
/// is kept between requests.
pub struct PowerService<C> {
    client: C,
    credentials: Credentials,
}

impl<C: PduClient> PowerService<C> {
    /// Create a new service backed by the given client and settings.
    pub fn new(client: C, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Verify that an authenticated session can be established.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::Auth`] when the controller rejects the
    /// configured credentials or cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn check_session(&self) -> Result<(), PowerHubError> {
        self.session().await
    }

    /// List snapshots of all PDUs.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::Auth`] on login failure, or whatever the
    /// controller reports.
    #[tracing::instrument(skip(self))]
    pub async fn list_pdus(&self) -> Result<Vec<Pdu>, PowerHubError> {
        self.session().await?;
        self.client.list_pdus().await
    }

    /// List outlet snapshots sorted by composite key.
    ///
    /// `outlet_number` narrows the result only when `pdu_id` is also given;
    /// on its own it is ignored. A `pdu_id` filter naming an unknown PDU
    /// fails before any outlet lookup happens.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::NotFound`] for an unknown `pdu_id` filter,
    /// [`PowerHubError::Auth`] on login failure, or whatever the controller
    /// reports.
    #[tracing::instrument(skip(self))]
    pub async fn list_outlets(
        &self,
        pdu_id: Option<&str>,
        outlet_number: Option<&str>,
    ) -> Result<Vec<(OutletKey, Outlet)>, PowerHubError> {
        self.session().await?;

        if let Some(pdu_id) = pdu_id {
            let pdus = self.client.list_pdus().await?;
            if !pdus.iter().any(|pdu| pdu.pdu_id == pdu_id) {
                return Err(NotFoundError {
                    entity: "PDU",
                    id: pdu_id.to_string(),
                }
                .into());
            }
        }

        let status = self.client.status(None).await?;
        let mut outlets: Vec<(OutletKey, Outlet)> = status
            .into_iter()
            .filter(|(key, _)| match (pdu_id, outlet_number) {
                (Some(pdu), Some(number)) => {
                    key.pdu_id == pdu && key.outlet_number == number
                }
                (Some(pdu), None) => key.pdu_id == pdu,
                (None, _) => true,
            })
            .collect();
        outlets.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(outlets)
    }

    /// Fetch the status snapshot of a single outlet.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::NotFound`] when the key is absent from the
    /// controller's status map, [`PowerHubError::Auth`] on login failure,
    /// or whatever the controller reports.
    #[tracing::instrument(skip(self))]
    pub async fn outlet_status(&self, key: &OutletKey) -> Result<Outlet, PowerHubError> {
        self.session().await?;
        let mut status = self
            .client
            .status(Some(std::slice::from_ref(key)))
            .await?;
        status.remove(key).ok_or_else(|| {
            NotFoundError {
                entity: "Outlet",
                id: key.to_string(),
            }
            .into()
        })
    }

    /// Apply an action to a single outlet.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::Device`] when the controller refuses the
    /// command, [`PowerHubError::Auth`] on login failure.
    #[tracing::instrument(skip(self))]
    pub async fn apply(&self, action: OutletAction, key: &OutletKey) -> Result<(), PowerHubError> {
        self.session().await?;
        self.client.switch(action, key).await?;
        tracing::info!(outlet = %key, action = %action, "outlet switched");
        Ok(())
    }

    /// Apply an action to many outlets under a single session.
    ///
    /// The session is acquired once for the whole batch. Per-outlet
    /// controller failures are returned alongside their key and do not
    /// abort the remaining outlets.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::Auth`] when no session could be
    /// established; per-outlet failures live in the result vector, not in
    /// the overall error.
    #[tracing::instrument(skip(self, keys))]
    pub async fn apply_many(
        &self,
        action: OutletAction,
        keys: Vec<OutletKey>,
    ) -> Result<Vec<(OutletKey, Result<(), PowerHubError>)>, PowerHubError> {
        self.session().await?;
        let mut outcomes = Vec::with_capacity(keys.len());
        for key in keys {
            let result = self.client.switch(action, &key).await;
            if result.is_ok() {
                tracing::info!(outlet = %key, action = %action, "outlet switched");
            }
            outcomes.push((key, result));
        }
        Ok(outcomes)
    }

    async fn session(&self) -> Result<(), PowerHubError> {
        self.client.login(&self.credentials).await.map_err(|err| {
            tracing::warn!(
                base_url = %self.credentials.base_url,
                error = %err,
                "failed to log in to PDU controller"
            );
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct StubClient {
        reject_login: bool,
        pdus: Vec<Pdu>,
        outlets: Mutex<HashMap<OutletKey, Outlet>>,
    }

    impl StubClient {
        fn new(pdu_ids: &[&str], keys: &[(&str, &str)]) -> Self {
            let outlets = keys
                .iter()
                .map(|(pdu, number)| {
                    (
                        OutletKey::new(*pdu, *number),
                        Outlet {
                            status: Some("off".to_string()),
                            ..Outlet::default()
                        },
                    )
                })
                .collect();
            Self {
                reject_login: false,
                pdus: pdu_ids.iter().map(|id| Pdu::new(*id)).collect(),
                outlets: Mutex::new(outlets),
            }
        }
    }

    impl PduClient for StubClient {
        fn login(
            &self,
            _credentials: &Credentials,
        ) -> impl Future<Output = Result<(), PowerHubError>> + Send {
            let result = if self.reject_login {
                Err(PowerHubError::Auth("login refused".to_string()))
            } else {
                Ok(())
            };
            async { result }
        }

        fn list_pdus(&self) -> impl Future<Output = Result<Vec<Pdu>, PowerHubError>> + Send {
            let pdus = self.pdus.clone();
            async { Ok(pdus) }
        }

        fn status(
            &self,
            filter: Option<&[OutletKey]>,
        ) -> impl Future<Output = Result<HashMap<OutletKey, Outlet>, PowerHubError>> + Send
        {
            let outlets = self.outlets.lock().unwrap();
            let result = match filter {
                Some(keys) => keys
                    .iter()
                    .filter_map(|key| outlets.get(key).map(|o| (key.clone(), o.clone())))
                    .collect(),
                None => outlets.clone(),
            };
            async { Ok(result) }
        }

        fn switch(
            &self,
            action: OutletAction,
            key: &OutletKey,
        ) -> impl Future<Output = Result<(), PowerHubError>> + Send {
            let mut outlets = self.outlets.lock().unwrap();
            let result = match outlets.get_mut(key) {
                Some(outlet) => {
                    outlet.status = Some(
                        match action {
                            OutletAction::Off => "off",
                            OutletAction::On | OutletAction::Cycle => "on",
                        }
                        .to_string(),
                    );
                    Ok(())
                }
                None => Err(PowerHubError::Device(format!(
                    "no such outlet: {key}"
                ))),
            };
            async { result }
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            base_url: "https://localhost".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }

    fn make_service(client: StubClient) -> PowerService<StubClient> {
        PowerService::new(client, credentials())
    }

    #[tokio::test]
    async fn should_list_outlets_sorted_by_composite_key() {
        let svc = make_service(StubClient::new(
            &["power1", "power2"],
            &[("power2", "1"), ("power1", "2"), ("power1", "1")],
        ));

        let outlets = svc.list_outlets(None, None).await.unwrap();
        let keys: Vec<String> = outlets.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, ["power1/1", "power1/2", "power2/1"]);
    }

    #[tokio::test]
    async fn should_filter_outlets_by_pdu() {
        let svc = make_service(StubClient::new(
            &["power1", "power2"],
            &[("power1", "1"), ("power2", "1"), ("power2", "2")],
        ));

        let outlets = svc.list_outlets(Some("power2"), None).await.unwrap();
        assert_eq!(outlets.len(), 2);
        assert!(outlets.iter().all(|(key, _)| key.pdu_id == "power2"));
    }

    #[tokio::test]
    async fn should_filter_outlets_by_pdu_and_number() {
        let svc = make_service(StubClient::new(
            &["power1"],
            &[("power1", "1"), ("power1", "2")],
        ));

        let outlets = svc
            .list_outlets(Some("power1"), Some("2"))
            .await
            .unwrap();
        assert_eq!(outlets.len(), 1);
        assert_eq!(outlets[0].0, OutletKey::new("power1", "2"));
    }

    #[tokio::test]
    async fn should_ignore_outlet_number_without_pdu_filter() {
        let svc = make_service(StubClient::new(
            &["power1"],
            &[("power1", "1"), ("power1", "2")],
        ));

        let outlets = svc.list_outlets(None, Some("2")).await.unwrap();
        assert_eq!(outlets.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_pdu_filter() {
        let svc = make_service(StubClient::new(&["power1"], &[("power1", "1")]));

        let result = svc.list_outlets(Some("power9"), None).await;
        assert!(matches!(result, Err(PowerHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_outlet_missing() {
        let svc = make_service(StubClient::new(&["power1"], &[("power1", "1")]));

        let result = svc.outlet_status(&OutletKey::new("power1", "9")).await;
        assert!(matches!(result, Err(PowerHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_fetch_single_outlet_status() {
        let svc = make_service(StubClient::new(&["power1"], &[("power1", "1")]));

        let outlet = svc
            .outlet_status(&OutletKey::new("power1", "1"))
            .await
            .unwrap();
        assert_eq!(outlet.status.as_deref(), Some("off"));
    }

    #[tokio::test]
    async fn should_apply_action_and_report_new_status() {
        let svc = make_service(StubClient::new(&["power1"], &[("power1", "1")]));
        let key = OutletKey::new("power1", "1");

        svc.apply(OutletAction::On, &key).await.unwrap();

        let outlet = svc.outlet_status(&key).await.unwrap();
        assert_eq!(outlet.status.as_deref(), Some("on"));
    }

    #[tokio::test]
    async fn should_report_device_error_for_unknown_outlet_action() {
        let svc = make_service(StubClient::new(&["power1"], &[("power1", "1")]));

        let result = svc
            .apply(OutletAction::On, &OutletKey::new("power1", "9"))
            .await;
        assert!(matches!(result, Err(PowerHubError::Device(_))));
    }

    #[tokio::test]
    async fn should_isolate_controller_failures_per_outlet_in_batch() {
        let svc = make_service(StubClient::new(
            &["power1"],
            &[("power1", "1"), ("power1", "2")],
        ));

        let outcomes = svc
            .apply_many(
                OutletAction::On,
                vec![
                    OutletKey::new("power1", "1"),
                    OutletKey::new("power1", "99"),
                    OutletKey::new("power1", "2"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].1.is_ok());
        assert!(matches!(outcomes[1].1, Err(PowerHubError::Device(_))));
        assert!(outcomes[2].1.is_ok());
    }

    #[tokio::test]
    async fn should_fail_whole_batch_when_login_rejected() {
        let mut client = StubClient::new(&["power1"], &[("power1", "1")]);
        client.reject_login = true;
        let svc = make_service(client);

        let result = svc
            .apply_many(OutletAction::On, vec![OutletKey::new("power1", "1")])
            .await;
        assert!(matches!(result, Err(PowerHubError::Auth(_))));
    }

    #[tokio::test]
    async fn should_fail_every_operation_when_login_rejected() {
        let mut client = StubClient::new(&["power1"], &[("power1", "1")]);
        client.reject_login = true;
        let svc = make_service(client);

        assert!(matches!(
            svc.check_session().await,
            Err(PowerHubError::Auth(_))
        ));
        assert!(matches!(svc.list_pdus().await, Err(PowerHubError::Auth(_))));
        assert!(matches!(
            svc.list_outlets(None, None).await,
            Err(PowerHubError::Auth(_))
        ));
        assert!(matches!(
            svc.apply(OutletAction::Off, &OutletKey::new("power1", "1"))
                .await,
            Err(PowerHubError::Auth(_))
        ));
    }
}
