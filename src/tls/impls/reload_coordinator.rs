use crate::tls::enums::material_source::MaterialSource;
use crate::tls::enums::reload_error::ReloadError;
use crate::tls::enums::reload_outcome::ReloadOutcome;
use crate::tls::structs::certificate_material::CertificateMaterial;
use crate::tls::structs::client_config_parts::ClientConfigParts;
use crate::tls::structs::handshake_options::HandshakeOptions;
use crate::tls::structs::reload_coordinator::ReloadCoordinator;
use crate::tls::structs::reload_payload::ReloadPayload;
use crate::tls::structs::reload_report::ReloadReport;
use crate::tls::structs::slot::Slot;
use crate::tls::tls::{
    generate_trust_pool,
    load_certificate,
    parse_certificate
};
use crate::tls::types::{
    CertificateSlot,
    TrustPoolSlot
};
use log::{
    error,
    info
};
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

impl ReloadCoordinator {
    pub fn new(
        options: Arc<HandshakeOptions>,
        provider: Arc<CryptoProvider>,
        certificate: Arc<CertificateSlot>,
        client_cas: Arc<TrustPoolSlot>,
        root_cas: Arc<TrustPoolSlot>,
        client_config: Option<(Arc<Slot<rustls::ClientConfig>>, ClientConfigParts)>,
    ) -> Self {
        Self {
            options,
            provider,
            certificate,
            client_cas,
            root_cas,
            client_config,
            lock: Mutex::new(()),
        }
    }

    /// Re-reads every configured source. Parts are independent: a failing
    /// part keeps its current value and does not stop the others.
    pub fn reload_from_files(&self) -> ReloadReport {
        let _guard = self.lock.lock();
        info!("[RELOAD] Reloading TLS material from configured sources");

        let certificate = if self.options.cert_required {
            match load_certificate(&self.options.cert, &self.options.key, &self.options.key_passphrase) {
                Ok(material) => self.install_certificate(material),
                Err(error) => ReloadOutcome::Failed(error.into()),
            }
        } else {
            ReloadOutcome::Skipped
        };
        certificate.log("certificate");

        let client_cas = match self.options.client_ca_source() {
            Some((ca_source, use_system)) => self.reload_trust_pool(&self.client_cas, ca_source, use_system),
            None => ReloadOutcome::Skipped,
        };
        client_cas.log("client CAs");

        let root_cas = match self.options.root_ca_source() {
            Some((ca_source, use_system)) => self.reload_trust_pool(&self.root_cas, ca_source, use_system),
            None => ReloadOutcome::Skipped,
        };
        root_cas.log("root CAs");

        ReloadReport {
            certificate,
            client_cas,
            root_cas,
        }
    }

    /// Installs a pushed certificate. Only the certificate is affected; the
    /// CA pools are left alone.
    pub fn reload_from_payload(&self, payload: &[u8]) -> ReloadOutcome {
        let _guard = self.lock.lock();

        let outcome = if !self.options.cert_required {
            ReloadOutcome::Skipped
        } else {
            match serde_json::from_slice::<ReloadPayload>(payload) {
                Err(error) => ReloadOutcome::Failed(ReloadError::MalformedPayload(error)),
                Ok(payload) => match parse_certificate(
                    payload.cert.as_bytes(),
                    payload.cert_key.as_bytes(),
                    &payload.cert_key_pass_phrase,
                    MaterialSource::Payload,
                ) {
                    Ok(material) => self.install_certificate(material),
                    Err(error) => ReloadOutcome::Failed(error.into()),
                },
            }
        };
        outcome.log("certificate");
        outcome
    }

    /// Runs `reload_from_files` every `period`, starting one period from now.
    pub fn spawn_interval(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("[RELOAD] Reloading TLS material every {} seconds", period.as_secs());
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                let coordinator = Arc::clone(&self);
                if let Err(error) = tokio::task::spawn_blocking(move || coordinator.reload_from_files()).await {
                    error!("[RELOAD] Reload task failed: {}", error);
                }
            }
        })
    }

    pub fn certificate_slot(&self) -> &Arc<CertificateSlot> {
        &self.certificate
    }

    // A client config that cannot be rebuilt leaves both the certificate and
    // the published client config untouched.
    fn install_certificate(&self, material: CertificateMaterial) -> ReloadOutcome {
        let material = Arc::new(material);
        if let Some((current, parts)) = &self.client_config {
            match parts.assemble(Some(&*material)) {
                Ok(config) => {
                    current.publish(config);
                }
                Err(error) => return ReloadOutcome::Failed(ReloadError::ClientConfig(error)),
            }
        }
        info!("[RELOAD] Installing certificate {} from {}", material.fingerprint(), material.source());
        ReloadOutcome::Published(self.certificate.publish_arc(material))
    }

    fn reload_trust_pool(&self, slot: &TrustPoolSlot, ca_source: &str, use_system: bool) -> ReloadOutcome {
        match generate_trust_pool(ca_source, use_system, &self.provider) {
            Ok(pool) => ReloadOutcome::Published(slot.publish(pool)),
            Err(error) => ReloadOutcome::Failed(error.into()),
        }
    }
}

impl std::fmt::Debug for ReloadCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadCoordinator")
            .field("role", &self.options.role)
            .field("certificate", &self.certificate)
            .field("client_cas", &self.client_cas)
            .field("root_cas", &self.root_cas)
            .finish_non_exhaustive()
    }
}
