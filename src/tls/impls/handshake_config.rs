use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::config_error::ConfigError;
use crate::tls::enums::config_role::ConfigRole;
use crate::tls::enums::endpoint_config::EndpointConfig;
use crate::tls::structs::certificate_material::CertificateMaterial;
use crate::tls::structs::client_config_parts::ClientConfigParts;
use crate::tls::structs::handshake_config::HandshakeConfig;
use crate::tls::structs::handshake_options::HandshakeOptions;
use crate::tls::structs::insecure_server_cert_verifier::InsecureServerCertVerifier;
use crate::tls::structs::reload_coordinator::ReloadCoordinator;
use crate::tls::structs::slot::Slot;
use crate::tls::structs::slot_cert_resolver::SlotCertResolver;
use crate::tls::structs::slot_client_cert_verifier::SlotClientCertVerifier;
use crate::tls::structs::slot_server_cert_verifier::SlotServerCertVerifier;
use crate::tls::structs::version_range::VersionRange;
use crate::tls::structs::webpki_peer_verifier::WebPkiPeerVerifier;
use crate::tls::tls::{
    default_provider,
    generate_trust_pool,
    load_certificate
};
use crate::tls::traits::peer_verifier::PeerVerifier;
use crate::tls::types::{
    CertificateSlot,
    TrustPoolSlot
};
use log::{
    info,
    warn
};
use rustls::client::danger::ServerCertVerifier;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::ServerName;
use rustls::server::NoServerSessionStorage;
use rustls::{
    ClientConfig,
    ServerConfig
};
use std::sync::Arc;

impl HandshakeConfig {
    /// Validates `options`, loads every configured source and assembles the
    /// rustls configuration for the selected role.
    ///
    /// Returns the configuration together with the coordinator that reloads
    /// into the same slots the configuration reads from.
    pub fn build(options: HandshakeOptions) -> Result<(HandshakeConfig, Arc<ReloadCoordinator>), ConfigError> {
        Self::build_with_provider(options, default_provider())
    }

    pub fn build_with_provider(
        options: HandshakeOptions,
        provider: Arc<CryptoProvider>,
    ) -> Result<(HandshakeConfig, Arc<ReloadCoordinator>), ConfigError> {
        let version_range = VersionRange::parse(&options.min_version, &options.max_version)?;
        let client_auth = ClientAuthMode::parse(&options.client_auth)?;
        let server_name = match options.server_name.trim() {
            "" => None,
            name => Some(ServerName::try_from(name.to_string()).map_err(|e| {
                ConfigError::InvalidServerName(format!("'{}': {}", name, e))
            })?),
        };
        let options = Arc::new(options);

        let certificate = Arc::new(CertificateSlot::new("certificate"));
        if options.cert_required {
            let material = load_certificate(&options.cert, &options.key, &options.key_passphrase)?;
            info!(
                "[TLS] Loaded {} certificate {} from {}",
                material.key_algorithm(),
                material.fingerprint(),
                material.source()
            );
            certificate.publish(material);
        }

        let client_cas = Arc::new(TrustPoolSlot::new("client_cas"));
        if let Some((ca_source, use_system)) = options.client_ca_source() {
            let pool = generate_trust_pool(ca_source, use_system, &provider)?;
            info!("[TLS] Loaded {} client CA certificates", pool.len());
            client_cas.publish(pool);
        }

        let root_cas = Arc::new(TrustPoolSlot::new("root_cas"));
        if let Some((ca_source, use_system)) = options.root_ca_source() {
            let pool = generate_trust_pool(ca_source, use_system, &provider)?;
            info!("[TLS] Loaded {} root CA certificates", pool.len());
            root_cas.publish(pool);
        }

        if options.role.is_client() && client_auth.offers_client_auth() {
            warn!("[TLS] Client auth {} only applies to the server role, ignoring it", client_auth);
        }
        let peer_verifier: Option<Arc<dyn PeerVerifier>> = if options.role.is_server()
            && client_auth.requires_ca_verification()
        {
            if client_cas.is_empty() {
                warn!(
                    "[TLS] Client auth {} has no client CA source, every client certificate will be rejected",
                    client_auth
                );
            }
            Some(Arc::new(WebPkiPeerVerifier))
        } else {
            None
        };
        let effective_client_auth = client_auth.presence_only();
        let versions = version_range.protocol_versions();

        let endpoint = match options.role {
            ConfigRole::server => {
                let builder = ServerConfig::builder_with_provider(Arc::clone(&provider))
                    .with_protocol_versions(&versions)?;
                let resolver = Arc::new(SlotCertResolver::new(Arc::clone(&certificate)));
                let mut server_config = if effective_client_auth.offers_client_auth() {
                    let verifier = SlotClientCertVerifier::new(
                        effective_client_auth,
                        peer_verifier.clone(),
                        Arc::clone(&client_cas),
                        Arc::clone(&provider),
                    );
                    builder
                        .with_client_cert_verifier(Arc::new(verifier))
                        .with_cert_resolver(resolver)
                } else {
                    builder.with_no_client_auth().with_cert_resolver(resolver)
                };
                // Resumed sessions skip the resolver and the client verifier, so
                // a reload would not reach clients holding an old session.
                server_config.session_storage = Arc::new(NoServerSessionStorage {});
                server_config.send_tls13_tickets = 0;
                EndpointConfig::Server(Arc::new(server_config))
            }
            ConfigRole::client => {
                let server_verifier: Arc<dyn ServerCertVerifier> = if options.insecure {
                    warn!("[TLS] Server certificate verification is disabled (insecure = true)");
                    Arc::new(InsecureServerCertVerifier::new(Arc::clone(&provider)))
                } else {
                    Arc::new(SlotServerCertVerifier::new(Arc::clone(&root_cas), Arc::clone(&provider)))
                };
                let parts = ClientConfigParts {
                    provider: Arc::clone(&provider),
                    versions,
                    server_verifier,
                };
                let client_config = parts.assemble(certificate.read().as_deref())?;
                EndpointConfig::Client {
                    current: Arc::new(Slot::with_value("client_config", client_config)),
                    parts,
                }
            }
        };

        let client_config = match &endpoint {
            EndpointConfig::Client { current, parts } => Some((Arc::clone(current), parts.clone())),
            EndpointConfig::Server(_) => None,
        };
        let coordinator = Arc::new(ReloadCoordinator::new(
            Arc::clone(&options),
            provider,
            Arc::clone(&certificate),
            Arc::clone(&client_cas),
            Arc::clone(&root_cas),
            client_config,
        ));

        info!(
            "[TLS] Built {} configuration (versions {}, client auth {} enforced as {})",
            options.role, version_range, client_auth, effective_client_auth
        );

        Ok((
            HandshakeConfig {
                options,
                version_range,
                client_auth,
                effective_client_auth,
                server_name,
                endpoint,
                certificate,
                client_cas,
                root_cas,
                peer_verifier,
            },
            coordinator,
        ))
    }

    pub fn role(&self) -> ConfigRole {
        self.options.role
    }

    pub fn options(&self) -> &HandshakeOptions {
        &self.options
    }

    pub fn version_range(&self) -> VersionRange {
        self.version_range
    }

    /// The configured mode.
    pub fn client_auth(&self) -> ClientAuthMode {
        self.client_auth
    }

    /// The mode the handshake layer enforces on its own, without CA checks.
    pub fn effective_client_auth(&self) -> ClientAuthMode {
        self.effective_client_auth
    }

    /// Only server configurations carry a peer verifier. Client auth modes
    /// are ignored for the client role.
    pub fn has_peer_verifier(&self) -> bool {
        self.peer_verifier.is_some()
    }

    pub fn peer_verifier(&self) -> Option<&Arc<dyn PeerVerifier>> {
        self.peer_verifier.as_ref()
    }

    pub fn server_name(&self) -> Option<&ServerName<'static>> {
        self.server_name.as_ref()
    }

    pub fn server_config(&self) -> Option<Arc<ServerConfig>> {
        match &self.endpoint {
            EndpointConfig::Server(config) => Some(Arc::clone(config)),
            EndpointConfig::Client { .. } => None,
        }
    }

    /// The latest client configuration. Reloading the client certificate
    /// publishes a new one; connections already started keep theirs.
    pub fn client_config(&self) -> Option<Arc<ClientConfig>> {
        match &self.endpoint {
            EndpointConfig::Client { current, .. } => current.read(),
            EndpointConfig::Server(_) => None,
        }
    }

    pub fn current_certificate(&self) -> Option<Arc<CertificateMaterial>> {
        self.certificate.read()
    }

    pub fn certificate_slot(&self) -> &Arc<CertificateSlot> {
        &self.certificate
    }

    pub fn client_ca_slot(&self) -> &Arc<TrustPoolSlot> {
        &self.client_cas
    }

    pub fn root_ca_slot(&self) -> &Arc<TrustPoolSlot> {
        &self.root_cas
    }
}

impl std::fmt::Debug for HandshakeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandshakeConfig")
            .field("role", &self.options.role)
            .field("version_range", &self.version_range)
            .field("client_auth", &self.client_auth)
            .field("effective_client_auth", &self.effective_client_auth)
            .field("server_name", &self.server_name)
            .field("certificate", &self.certificate)
            .field("client_cas", &self.client_cas)
            .field("root_cas", &self.root_cas)
            .field("peer_verifier", &self.peer_verifier)
            .finish()
    }
}
