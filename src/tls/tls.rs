use crate::tls::enums::certificate_load_error::CertificateLoadError;
use crate::tls::enums::material_source::MaterialSource;
use crate::tls::enums::trust_pool_error::TrustPoolError;
use crate::tls::structs::certificate_material::CertificateMaterial;
use crate::tls::structs::trust_pool::TrustPool;
use log::{
    debug,
    warn
};
use pkcs8::EncryptedPrivateKeyInfo;
use pkcs8::der::pem;
use rustls::RootCertStore;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer,
    PrivatePkcs8KeyDer
};
use std::io::BufReader;
use std::sync::Arc;

pub const ENCRYPTED_PKCS8_LABEL: &str = "ENCRYPTED PRIVATE KEY";
const LEGACY_ENCRYPTION_HEADER: &str = "Proc-Type: 4,ENCRYPTED";
const INLINE_PEM_MARKER: &str = "-----BEGIN ";

pub fn default_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

/// Values containing a PEM header are material, anything else is a path.
pub fn is_inline_pem(value: &str) -> bool {
    value.contains(INLINE_PEM_MARKER)
}

/// Name used for a source in logs and errors. Inline material is never echoed.
pub fn source_label(value: &str) -> String {
    if is_inline_pem(value) {
        String::from("<inline>")
    } else {
        value.to_string()
    }
}

pub fn read_source(value: &str) -> std::io::Result<Vec<u8>> {
    if is_inline_pem(value) {
        return Ok(value.as_bytes().to_vec());
    }
    std::fs::read(value)
}

/// Reads and pairs a certificate chain and private key.
pub fn load_certificate(cert: &str, key: &str, passphrase: &str) -> Result<CertificateMaterial, CertificateLoadError> {
    let cert_pem = read_source(cert)
        .map_err(|e| CertificateLoadError::CertFileNotFound(format!("{}: {}", source_label(cert), e)))?;
    let key_pem = read_source(key)
        .map_err(|e| CertificateLoadError::KeyFileNotFound(format!("{}: {}", source_label(key), e)))?;
    parse_certificate(
        &cert_pem,
        &key_pem,
        passphrase,
        MaterialSource::Files {
            cert: source_label(cert),
            key: source_label(key),
        },
    )
}

pub fn parse_certificate(
    cert_pem: &[u8],
    key_pem: &[u8],
    passphrase: &str,
    source: MaterialSource,
) -> Result<CertificateMaterial, CertificateLoadError> {
    let (cert_origin, key_origin) = source.origins();
    let chain = parse_certificates(cert_pem, &cert_origin)?;
    let key = parse_private_key(key_pem, passphrase, &key_origin)?;
    CertificateMaterial::new(chain, key, source)
}

pub fn parse_certificates(pem: &[u8], origin: &str) -> Result<Vec<CertificateDer<'static>>, CertificateLoadError> {
    let certs = rustls_pemfile::certs(&mut BufReader::new(pem))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateLoadError::CertParseFailed(format!("{}: {}", origin, e)))?;
    if certs.is_empty() {
        return Err(CertificateLoadError::NoCertificateFound(origin.to_string()));
    }
    Ok(certs)
}

/// Accepts PKCS#8, PKCS#1 and SEC1 keys, and encrypted PKCS#8 when a
/// passphrase is given.
pub fn parse_private_key(pem: &[u8], passphrase: &str, origin: &str) -> Result<PrivateKeyDer<'static>, CertificateLoadError> {
    let text = String::from_utf8_lossy(pem);
    if text.contains(LEGACY_ENCRYPTION_HEADER) {
        return Err(CertificateLoadError::UnsupportedKeyEncryption(format!(
            "{} uses legacy PEM encryption, convert it to encrypted PKCS#8",
            origin
        )));
    }
    if pem_label(pem) == Some(ENCRYPTED_PKCS8_LABEL) {
        return decrypt_private_key(pem, passphrase);
    }

    match rustls_pemfile::private_key(&mut BufReader::new(pem)) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => Err(CertificateLoadError::NoKeyFound(origin.to_string())),
        Err(e) => Err(CertificateLoadError::KeyParseFailed(format!("{}: {}", origin, e))),
    }
}

pub fn decrypt_private_key(pem: &[u8], passphrase: &str) -> Result<PrivateKeyDer<'static>, CertificateLoadError> {
    if passphrase.is_empty() {
        return Err(CertificateLoadError::PassphraseRequired);
    }
    let (label, der) = pem::decode_vec(pem.trim_ascii())
        .map_err(|e| CertificateLoadError::KeyParseFailed(e.to_string()))?;
    if label != ENCRYPTED_PKCS8_LABEL {
        return Err(CertificateLoadError::KeyParseFailed(format!("unexpected PEM label '{}'", label)));
    }
    let encrypted = EncryptedPrivateKeyInfo::try_from(der.as_slice())
        .map_err(|e| CertificateLoadError::KeyParseFailed(e.to_string()))?;
    let decrypted = encrypted
        .decrypt(passphrase)
        .map_err(|e| CertificateLoadError::KeyDecryptionFailed(e.to_string()))?;
    Ok(PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(decrypted.as_bytes().to_vec())))
}

/// Label of the leading PEM block, `None` when the input is not RFC 7468 PEM.
pub fn pem_label(pem: &[u8]) -> Option<&str> {
    pem::decode_label(pem.trim_ascii()).ok()
}

/// Builds a trust pool from a CA bundle (path or inline PEM), optionally
/// seeded with the system trust store. An unreadable system store only logs.
pub fn generate_trust_pool(
    ca_source: &str,
    use_system: bool,
    provider: &Arc<CryptoProvider>,
) -> Result<TrustPool, TrustPoolError> {
    let mut anchors = RootCertStore::empty();

    if use_system {
        let native = rustls_native_certs::load_native_certs();
        for error in &native.errors {
            warn!("[TRUSTPOOL] Error reading system trust store: {}", error);
        }
        let (added, ignored) = anchors.add_parsable_certificates(native.certs);
        debug!("[TRUSTPOOL] Added {} system CA certificates ({} ignored)", added, ignored);
    }

    if !ca_source.trim().is_empty() {
        let label = source_label(ca_source);
        let pem = read_source(ca_source)
            .map_err(|e| TrustPoolError::CaFileNotFound(format!("{}: {}", label, e)))?;
        let certs = rustls_pemfile::certs(&mut BufReader::new(pem.as_slice()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TrustPoolError::CaParseFailed(format!("{}: {}", label, e)))?;
        let (added, ignored) = anchors.add_parsable_certificates(certs);
        if added == 0 {
            return Err(TrustPoolError::NoCaCertificates(label));
        }
        debug!("[TRUSTPOOL] Added {} CA certificates from {} ({} ignored)", added, label, ignored);
    }

    TrustPool::new(anchors, &source_label(ca_source), use_system, provider)
}
