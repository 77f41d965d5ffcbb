use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("No client certificate presented")]
    MissingCertificate,
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),
    #[error("Failed to verify certificate: {0}")]
    ChainVerificationFailed(String),
}
