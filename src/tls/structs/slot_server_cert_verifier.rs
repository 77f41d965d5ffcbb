use crate::tls::types::TrustPoolSlot;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

pub struct SlotServerCertVerifier {
    pub(crate) trust_pool: Arc<TrustPoolSlot>,
    pub(crate) provider: Arc<CryptoProvider>,
}
