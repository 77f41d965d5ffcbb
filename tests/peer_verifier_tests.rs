mod common;

use rustls::pki_types::{
    CertificateDer,
    UnixTime
};
use tls_hotswap::tls::enums::verification_error::VerificationError;
use tls_hotswap::tls::structs::slot::Slot;
use tls_hotswap::tls::structs::trust_pool::TrustPool;
use tls_hotswap::tls::structs::webpki_peer_verifier::WebPkiPeerVerifier;
use tls_hotswap::tls::tls::generate_trust_pool;
use tls_hotswap::tls::traits::peer_verifier::PeerVerifier;

fn pool_for(ca: &common::TestCa) -> TrustPool {
    generate_trust_pool(&ca.pem(), false, &common::provider()).unwrap()
}

#[test]
fn test_accepts_chain_from_trusted_ca() {
    let ca = common::create_ca("Client CA");
    let leaf = common::issue_leaf(&ca, "client.test");
    let result = WebPkiPeerVerifier.verify(&[leaf.certificate()], &pool_for(&ca), UnixTime::now());
    assert_eq!(result, Ok(()));
}

#[test]
fn test_rejects_empty_chain() {
    let ca = common::create_ca("Client CA");
    let result = WebPkiPeerVerifier.verify(&[], &pool_for(&ca), UnixTime::now());
    assert_eq!(result, Err(VerificationError::MissingCertificate));
}

#[test]
fn test_rejects_unparsable_certificate() {
    let ca = common::create_ca("Client CA");
    let garbage = CertificateDer::from(vec![0x30, 0x03, 0x02, 0x01, 0x00]);
    let result = WebPkiPeerVerifier.verify(&[garbage], &pool_for(&ca), UnixTime::now());
    assert!(matches!(result, Err(VerificationError::InvalidCertificate(_))));
}

#[test]
fn test_rejects_chain_from_other_ca() {
    let trusted = common::create_ca("Trusted CA");
    let other = common::create_ca("Other CA");
    let leaf = common::issue_leaf(&other, "client.test");
    let result = WebPkiPeerVerifier.verify(&[leaf.certificate()], &pool_for(&trusted), UnixTime::now());
    assert!(matches!(result, Err(VerificationError::ChainVerificationFailed(_))));
}

#[test]
fn test_rejects_everything_with_empty_pool() {
    let ca = common::create_ca("Client CA");
    let leaf = common::issue_leaf(&ca, "client.test");
    let result = WebPkiPeerVerifier.verify(&[leaf.certificate()], &TrustPool::empty(), UnixTime::now());
    assert!(matches!(result, Err(VerificationError::ChainVerificationFailed(_))));
}

#[test]
fn test_pool_with_several_cas() {
    let first = common::create_ca("First CA");
    let second = common::create_ca("Second CA");
    let bundle = format!("{}{}", first.pem(), second.pem());
    let pool = generate_trust_pool(&bundle, false, &common::provider()).unwrap();
    assert_eq!(pool.len(), 2);

    for ca in [&first, &second] {
        let leaf = common::issue_leaf(ca, "client.test");
        assert_eq!(WebPkiPeerVerifier.verify(&[leaf.certificate()], &pool, UnixTime::now()), Ok(()));
    }
}

#[test]
fn test_verification_errors_map_to_rustls() {
    assert_eq!(
        rustls::Error::from(VerificationError::MissingCertificate),
        rustls::Error::NoCertificatesPresented
    );
    assert!(matches!(
        rustls::Error::from(VerificationError::InvalidCertificate(String::from("bad"))),
        rustls::Error::InvalidCertificate(_)
    ));
}

#[test]
fn test_verdict_follows_replaced_pool() {
    let ca = common::create_ca("Client CA");
    let replacement = common::create_ca("Replacement CA");
    let leaf = common::issue_leaf(&ca, "client.test");
    let chain = [leaf.certificate()];
    let slot = Slot::with_value("client_cas", pool_for(&ca));

    let snapshot = slot.read().unwrap();
    assert_eq!(WebPkiPeerVerifier.verify(&chain, &snapshot, UnixTime::now()), Ok(()));

    slot.publish(pool_for(&replacement));
    let snapshot = slot.read().unwrap();
    assert!(matches!(
        WebPkiPeerVerifier.verify(&chain, &snapshot, UnixTime::now()),
        Err(VerificationError::ChainVerificationFailed(_))
    ));
}

#[test]
fn test_intermediates_are_used() {
    let root = common::create_ca("Root CA");
    let intermediate = common::create_intermediate(&root, "Intermediate CA");
    let leaf = common::issue_leaf(&intermediate, "client.test");
    let pool = pool_for(&root);

    assert!(WebPkiPeerVerifier.verify(&[leaf.certificate()], &pool, UnixTime::now()).is_err());
    assert_eq!(
        WebPkiPeerVerifier.verify(&[leaf.certificate(), intermediate.der()], &pool, UnixTime::now()),
        Ok(())
    );
}
