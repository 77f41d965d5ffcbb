use crate::tls::enums::verification_error::VerificationError;
use crate::tls::structs::trust_pool::TrustPool;
use crate::tls::structs::webpki_peer_verifier::WebPkiPeerVerifier;
use crate::tls::traits::peer_verifier::PeerVerifier;
use rustls::pki_types::{
    CertificateDer,
    UnixTime
};
use rustls::server::ParsedCertificate;

impl PeerVerifier for WebPkiPeerVerifier {
    fn verify(
        &self,
        chain: &[CertificateDer<'_>],
        trust_pool: &TrustPool,
        now: UnixTime,
    ) -> Result<(), VerificationError> {
        let Some((leaf, intermediates)) = chain.split_first() else {
            return Err(VerificationError::MissingCertificate);
        };
        for certificate in chain {
            ParsedCertificate::try_from(certificate)
                .map_err(|e| VerificationError::InvalidCertificate(e.to_string()))?;
        }

        let verifier = trust_pool.client_verifier().ok_or_else(|| {
            VerificationError::ChainVerificationFailed(String::from("no client CA certificates loaded"))
        })?;
        verifier
            .verify_client_cert(leaf, intermediates, now)
            .map(|_| ())
            .map_err(|e| VerificationError::ChainVerificationFailed(e.to_string()))
    }
}
