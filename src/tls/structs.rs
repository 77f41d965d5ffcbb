//! Data structures for the TLS handshake configuration.

/// Declarative handshake options (`[tls]` table of the configuration file).
pub mod handshake_options;

/// Validated minimum/maximum protocol version pair.
pub mod version_range;

/// An immutable, paired certificate chain and private key.
pub mod certificate_material;

/// An immutable set of trust anchors plus the verifiers built from it.
pub mod trust_pool;

/// Atomic-publish holder shared between reloads and handshakes.
pub mod slot;

/// `ResolvesServerCert` backed by the certificate slot.
pub mod slot_cert_resolver;

/// `ClientCertVerifier` adapter: presence-only policy plus the injected verifier.
pub mod slot_client_cert_verifier;

/// `ServerCertVerifier` backed by the root CA slot (client role).
pub mod slot_server_cert_verifier;

/// `ServerCertVerifier` accepting any server certificate (`insecure = true`).
pub mod insecure_server_cert_verifier;

/// Chain verification against a trust pool snapshot, client-auth usage.
pub mod webpki_peer_verifier;

/// Ingredients needed to rebuild a client configuration on reload.
pub mod client_config_parts;

/// The assembled configuration handed to listeners and connectors.
pub mod handshake_config;

/// Serialized reload operations publishing into the slots.
pub mod reload_coordinator;

/// Pushed certificate payload (`cert`, `certKey`, `certKeyPassPhrase`).
pub mod reload_payload;

/// Per-part result of a file reload.
pub mod reload_report;
