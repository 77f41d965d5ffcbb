use crate::tls::enums::verification_error::VerificationError;
use rustls::CertificateError;

impl From<VerificationError> for rustls::Error {
    fn from(error: VerificationError) -> Self {
        match error {
            VerificationError::MissingCertificate => rustls::Error::NoCertificatesPresented,
            VerificationError::InvalidCertificate(_) => {
                rustls::Error::InvalidCertificate(CertificateError::BadEncoding)
            }
            VerificationError::ChainVerificationFailed(_) => {
                rustls::Error::InvalidCertificate(CertificateError::ApplicationVerificationFailure)
            }
        }
    }
}
