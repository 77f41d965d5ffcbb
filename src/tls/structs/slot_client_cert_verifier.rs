use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::traits::peer_verifier::PeerVerifier;
use crate::tls::types::TrustPoolSlot;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

/// `presence` is the CA-agnostic level rustls enforces (`Request` or
/// `RequireAny`); CA-backed checks run only through `verifier`.
pub struct SlotClientCertVerifier {
    pub(crate) presence: ClientAuthMode,
    pub(crate) verifier: Option<Arc<dyn PeerVerifier>>,
    pub(crate) trust_pool: Arc<TrustPoolSlot>,
    pub(crate) provider: Arc<CryptoProvider>,
}
