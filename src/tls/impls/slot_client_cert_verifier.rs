use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::verification_error::VerificationError;
use crate::tls::structs::slot_client_cert_verifier::SlotClientCertVerifier;
use crate::tls::traits::peer_verifier::PeerVerifier;
use crate::tls::types::TrustPoolSlot;
use log::debug;
use rustls::client::danger::HandshakeSignatureValid;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{
    CertificateDer,
    UnixTime
};
use rustls::server::danger::{
    ClientCertVerified,
    ClientCertVerifier
};
use rustls::{
    DigitallySignedStruct,
    DistinguishedName,
    SignatureScheme
};
use std::sync::Arc;

impl SlotClientCertVerifier {
    pub fn new(
        presence: ClientAuthMode,
        verifier: Option<Arc<dyn PeerVerifier>>,
        trust_pool: Arc<TrustPoolSlot>,
        provider: Arc<CryptoProvider>,
    ) -> Self {
        Self {
            presence: presence.presence_only(),
            verifier,
            trust_pool,
            provider,
        }
    }
}

impl std::fmt::Debug for SlotClientCertVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotClientCertVerifier")
            .field("presence", &self.presence)
            .field("verifier", &self.verifier)
            .field("trust_pool", &self.trust_pool)
            .finish_non_exhaustive()
    }
}

impl ClientCertVerifier for SlotClientCertVerifier {
    fn offer_client_auth(&self) -> bool {
        self.presence.offers_client_auth()
    }

    fn client_auth_mandatory(&self) -> bool {
        self.presence.is_mandatory()
    }

    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &[]
    }

    fn verify_client_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        now: UnixTime,
    ) -> Result<ClientCertVerified, rustls::Error> {
        let Some(verifier) = &self.verifier else {
            return Ok(ClientCertVerified::assertion());
        };

        let mut chain = Vec::with_capacity(intermediates.len() + 1);
        chain.push(end_entity.clone());
        chain.extend(intermediates.iter().cloned());

        // One snapshot per handshake.
        let result = match self.trust_pool.read() {
            Some(pool) => verifier.verify(&chain, &pool, now),
            None => Err(VerificationError::ChainVerificationFailed(String::from("no client CA pool published"))),
        };

        result
            .map(|_| ClientCertVerified::assertion())
            .map_err(|error| {
                debug!("[VERIFY] Rejected client certificate: {}", error);
                error.into()
            })
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
