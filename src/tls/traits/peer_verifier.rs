use crate::tls::enums::verification_error::VerificationError;
use crate::tls::structs::trust_pool::TrustPool;
use rustls::pki_types::{
    CertificateDer,
    UnixTime
};

/// Decides whether a presented chain is acceptable.
///
/// `chain[0]` is the leaf, the remainder are intermediates supplied by the
/// peer. `trust_pool` is a snapshot taken once per call; implementations must
/// not consult any other mutable state.
pub trait PeerVerifier: Send + Sync + std::fmt::Debug {
    fn verify(
        &self,
        chain: &[CertificateDer<'_>],
        trust_pool: &TrustPool,
        now: UnixTime,
    ) -> Result<(), VerificationError>;
}
