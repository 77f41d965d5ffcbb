use crate::tls::structs::client_config_parts::ClientConfigParts;
use crate::tls::structs::handshake_options::HandshakeOptions;
use crate::tls::structs::slot::Slot;
use crate::tls::types::{
    CertificateSlot,
    TrustPoolSlot
};
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

pub struct ReloadCoordinator {
    pub(crate) options: Arc<HandshakeOptions>,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) certificate: Arc<CertificateSlot>,
    pub(crate) client_cas: Arc<TrustPoolSlot>,
    pub(crate) root_cas: Arc<TrustPoolSlot>,
    pub(crate) client_config: Option<(Arc<Slot<rustls::ClientConfig>>, ClientConfigParts)>,
    pub(crate) lock: Mutex<()>,
}
