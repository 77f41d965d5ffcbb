use crate::tls::enums::key_algorithm::KeyAlgorithm;
use crate::tls::enums::material_source::MaterialSource;
use rustls::pki_types::PrivateKeyDer;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct CertificateMaterial {
    pub(crate) certified_key: Arc<CertifiedKey>,
    pub(crate) private_key: PrivateKeyDer<'static>,
    pub(crate) key_algorithm: KeyAlgorithm,
    pub(crate) fingerprint: String,
    pub(crate) source: MaterialSource,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
}
