use rustls::RootCertStore;
use rustls::client::WebPkiServerVerifier;
use rustls::server::danger::ClientCertVerifier;
use std::sync::Arc;

/// Verifiers are built once per pool, off the handshake path. An empty pool
/// has none and rejects every chain.
pub struct TrustPool {
    pub(crate) anchors: Arc<RootCertStore>,
    pub(crate) client_verifier: Option<Arc<dyn ClientCertVerifier>>,
    pub(crate) server_verifier: Option<Arc<WebPkiServerVerifier>>,
    pub(crate) ca_source: String,
    pub(crate) includes_system: bool,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
}
