use crate::tls::structs::slot_cert_resolver::SlotCertResolver;
use crate::tls::types::CertificateSlot;
use log::debug;
use rustls::server::{
    ClientHello,
    ResolvesServerCert
};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl SlotCertResolver {
    pub fn new(slot: Arc<CertificateSlot>) -> Self {
        Self { slot }
    }
}

impl std::fmt::Debug for SlotCertResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotCertResolver")
            .field("slot", &self.slot)
            .finish()
    }
}

impl ResolvesServerCert for SlotCertResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        match self.slot.read() {
            Some(material) => Some(Arc::clone(material.certified_key())),
            None => {
                debug!("[TLS] No certificate published, refusing handshake for {:?}", client_hello.server_name());
                None
            }
        }
    }
}
