use rustls::SupportedProtocolVersion;
use rustls::client::danger::ServerCertVerifier;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct ClientConfigParts {
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) versions: Vec<&'static SupportedProtocolVersion>,
    pub(crate) server_verifier: Arc<dyn ServerCertVerifier>,
}
