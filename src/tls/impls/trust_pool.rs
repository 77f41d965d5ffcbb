use crate::tls::enums::trust_pool_error::TrustPoolError;
use crate::tls::structs::trust_pool::TrustPool;
use rustls::RootCertStore;
use rustls::client::WebPkiServerVerifier;
use rustls::crypto::CryptoProvider;
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::ClientCertVerifier;
use std::sync::Arc;

impl TrustPool {
    pub fn new(
        anchors: RootCertStore,
        ca_source: &str,
        includes_system: bool,
        provider: &Arc<CryptoProvider>,
    ) -> Result<Self, TrustPoolError> {
        let anchors = Arc::new(anchors);
        let (client_verifier, server_verifier) = if anchors.is_empty() {
            (None, None)
        } else {
            let client = WebPkiClientVerifier::builder_with_provider(Arc::clone(&anchors), Arc::clone(provider))
                .build()
                .map_err(|e| TrustPoolError::VerifierBuildFailed(e.to_string()))?;
            let server = WebPkiServerVerifier::builder_with_provider(Arc::clone(&anchors), Arc::clone(provider))
                .build()
                .map_err(|e| TrustPoolError::VerifierBuildFailed(e.to_string()))?;
            (Some(client), Some(server))
        };

        Ok(Self {
            anchors,
            client_verifier,
            server_verifier,
            ca_source: ca_source.to_string(),
            includes_system,
            loaded_at: chrono::Utc::now(),
        })
    }

    pub fn empty() -> Self {
        Self {
            anchors: Arc::new(RootCertStore::empty()),
            client_verifier: None,
            server_verifier: None,
            ca_source: String::new(),
            includes_system: false,
            loaded_at: chrono::Utc::now(),
        }
    }

    pub fn anchors(&self) -> &RootCertStore {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn client_verifier(&self) -> Option<&Arc<dyn ClientCertVerifier>> {
        self.client_verifier.as_ref()
    }

    pub fn server_verifier(&self) -> Option<&Arc<WebPkiServerVerifier>> {
        self.server_verifier.as_ref()
    }

    pub fn ca_source(&self) -> &str {
        &self.ca_source
    }

    pub fn includes_system(&self) -> bool {
        self.includes_system
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}

impl std::fmt::Debug for TrustPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustPool")
            .field("anchors", &self.anchors.len())
            .field("ca_source", &self.ca_source)
            .field("includes_system", &self.includes_system)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
