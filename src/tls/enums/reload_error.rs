use crate::tls::enums::certificate_load_error::CertificateLoadError;
use crate::tls::enums::trust_pool_error::TrustPoolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("Malformed reload payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("{0}")]
    Certificate(#[from] CertificateLoadError),
    #[error("{0}")]
    TrustPool(#[from] TrustPoolError),
    #[error("Failed to rebuild client configuration: {0}")]
    ClientConfig(#[from] rustls::Error),
}
