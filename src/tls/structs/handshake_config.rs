use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::endpoint_config::EndpointConfig;
use crate::tls::structs::handshake_options::HandshakeOptions;
use crate::tls::structs::version_range::VersionRange;
use crate::tls::traits::peer_verifier::PeerVerifier;
use crate::tls::types::{
    CertificateSlot,
    TrustPoolSlot
};
use rustls::pki_types::ServerName;
use std::sync::Arc;

pub struct HandshakeConfig {
    pub(crate) options: Arc<HandshakeOptions>,
    pub(crate) version_range: VersionRange,
    pub(crate) client_auth: ClientAuthMode,
    pub(crate) effective_client_auth: ClientAuthMode,
    pub(crate) server_name: Option<ServerName<'static>>,
    pub(crate) endpoint: EndpointConfig,
    pub(crate) certificate: Arc<CertificateSlot>,
    pub(crate) client_cas: Arc<TrustPoolSlot>,
    pub(crate) root_cas: Arc<TrustPoolSlot>,
    pub(crate) peer_verifier: Option<Arc<dyn PeerVerifier>>,
}
