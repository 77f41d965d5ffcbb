//! Injectable policy seams.

/// Peer certificate chain verification against a trust pool snapshot.
pub mod peer_verifier;
