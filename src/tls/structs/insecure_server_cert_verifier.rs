use rustls::crypto::CryptoProvider;
use std::sync::Arc;

pub struct InsecureServerCertVerifier {
    pub(crate) provider: Arc<CryptoProvider>,
}
