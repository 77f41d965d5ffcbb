use crate::tls::types::CertificateSlot;
use std::sync::Arc;

pub struct SlotCertResolver {
    pub(crate) slot: Arc<CertificateSlot>,
}
