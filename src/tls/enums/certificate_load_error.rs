use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateLoadError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseFailed(String),
    #[error("No certificates found in {0}")]
    NoCertificateFound(String),
    #[error("Failed to parse key: {0}")]
    KeyParseFailed(String),
    #[error("No private key found in {0}")]
    NoKeyFound(String),
    #[error("Key is encrypted but no passphrase was given")]
    PassphraseRequired,
    #[error("Failed to decrypt key: {0}")]
    KeyDecryptionFailed(String),
    #[error("Unsupported key encryption: {0}")]
    UnsupportedKeyEncryption(String),
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("Certificate and key do not match: {0}")]
    CertKeyMismatch(String),
}
