use crate::tls::structs::slot_server_cert_verifier::SlotServerCertVerifier;
use crate::tls::structs::trust_pool::TrustPool;
use crate::tls::types::TrustPoolSlot;
use rustls::client::danger::{
    HandshakeSignatureValid,
    ServerCertVerified,
    ServerCertVerifier
};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{
    CertificateDer,
    ServerName,
    UnixTime
};
use rustls::{
    CertificateError,
    DigitallySignedStruct,
    SignatureScheme
};
use std::sync::Arc;

impl SlotServerCertVerifier {
    pub fn new(trust_pool: Arc<TrustPoolSlot>, provider: Arc<CryptoProvider>) -> Self {
        Self { trust_pool, provider }
    }
}

impl std::fmt::Debug for SlotServerCertVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotServerCertVerifier")
            .field("trust_pool", &self.trust_pool)
            .finish_non_exhaustive()
    }
}

impl ServerCertVerifier for SlotServerCertVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        let pool = self.trust_pool.read();
        match pool.as_deref().and_then(TrustPool::server_verifier) {
            Some(verifier) => verifier.verify_server_cert(end_entity, intermediates, server_name, ocsp_response, now),
            None => Err(rustls::Error::InvalidCertificate(CertificateError::UnknownIssuer)),
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider.signature_verification_algorithms.supported_schemes()
    }
}
