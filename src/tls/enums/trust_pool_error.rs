use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrustPoolError {
    #[error("CA file not found: {0}")]
    CaFileNotFound(String),
    #[error("Failed to parse CA file {0}")]
    CaParseFailed(String),
    #[error("No usable CA certificates in {0}")]
    NoCaCertificates(String),
    #[error("Failed to build verifier: {0}")]
    VerifierBuildFailed(String),
}
