use crate::tls::enums::certificate_load_error::CertificateLoadError;
use crate::tls::enums::key_algorithm::KeyAlgorithm;
use crate::tls::enums::material_source::MaterialSource;
use crate::tls::structs::certificate_material::CertificateMaterial;
use log::debug;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::InconsistentKeys;
use rustls::sign::CertifiedKey;
use sha2::{
    Digest,
    Sha256
};
use std::sync::Arc;

impl CertificateMaterial {
    /// Pairs a chain with its private key. Fails unless the key is usable for
    /// signing and its public half matches the leaf certificate.
    pub fn new(
        chain: Vec<CertificateDer<'static>>,
        private_key: PrivateKeyDer<'static>,
        source: MaterialSource,
    ) -> Result<Self, CertificateLoadError> {
        let fingerprint = match chain.first() {
            Some(leaf) => hex::encode(Sha256::digest(leaf.as_ref())),
            None => return Err(CertificateLoadError::NoCertificateFound(source.to_string())),
        };

        let signing_key = rustls::crypto::ring::sign::any_supported_type(&private_key)
            .map_err(|e| CertificateLoadError::UnsupportedKeyType(e.to_string()))?;
        let key_algorithm = KeyAlgorithm::from(signing_key.algorithm());

        let certified_key = CertifiedKey::new(chain, signing_key);
        match certified_key.keys_match() {
            Ok(()) => {}
            // The signing key cannot expose its public half, nothing to compare.
            Err(rustls::Error::InconsistentKeys(InconsistentKeys::Unknown)) => {
                debug!("[TLS] Unable to compare key and certificate from {}", source);
            }
            Err(e) => return Err(CertificateLoadError::CertKeyMismatch(format!("{}: {}", source, e))),
        }

        Ok(Self {
            certified_key: Arc::new(certified_key),
            private_key,
            key_algorithm,
            fingerprint,
            source,
            loaded_at: chrono::Utc::now(),
        })
    }

    pub fn certified_key(&self) -> &Arc<CertifiedKey> {
        &self.certified_key
    }

    /// Leaf first, then intermediates.
    pub fn certificate_chain(&self) -> &[CertificateDer<'static>] {
        &self.certified_key.cert
    }

    pub fn leaf(&self) -> Option<&CertificateDer<'static>> {
        self.certified_key.cert.first()
    }

    pub fn private_key(&self) -> &PrivateKeyDer<'static> {
        &self.private_key
    }

    pub fn key_algorithm(&self) -> KeyAlgorithm {
        self.key_algorithm
    }

    /// Lowercase hex SHA-256 of the leaf certificate.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn source(&self) -> &MaterialSource {
        &self.source
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}

impl std::fmt::Debug for CertificateMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateMaterial")
            .field("chain_len", &self.certified_key.cert.len())
            .field("key_algorithm", &self.key_algorithm)
            .field("fingerprint", &self.fingerprint)
            .field("source", &self.source)
            .field("loaded_at", &self.loaded_at)
            .finish_non_exhaustive()
    }
}
