use crate::tls::enums::certificate_load_error::CertificateLoadError;
use crate::tls::enums::trust_pool_error::TrustPoolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TLS version: {0}")]
    InvalidVersion(String),
    #[error("Invalid client auth: {0}")]
    InvalidAuthMode(String),
    #[error("Invalid server name: {0}")]
    InvalidServerName(String),
    #[error("Error loading certificate: {0}")]
    Certificate(#[from] CertificateLoadError),
    #[error("Error loading CA certificates: {0}")]
    TrustPool(#[from] TrustPoolError),
    #[error("Error assembling TLS configuration: {0}")]
    Tls(#[from] rustls::Error),
}
