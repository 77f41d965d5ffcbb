//! Implementation blocks for the TLS types.

pub mod config_role;
pub mod tls_version;
pub mod client_auth_mode;
pub mod key_algorithm;
pub mod material_source;
pub mod reload_outcome;
pub mod verification_error;
pub mod handshake_options;
pub mod version_range;
pub mod certificate_material;
pub mod trust_pool;
pub mod slot;
pub mod slot_cert_resolver;
pub mod slot_client_cert_verifier;
pub mod slot_server_cert_verifier;
pub mod insecure_server_cert_verifier;
pub mod webpki_peer_verifier;
pub mod client_config_parts;
pub mod handshake_config;
pub mod reload_coordinator;
pub mod reload_payload;
pub mod reload_report;
