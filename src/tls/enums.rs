//! Enumerations for the TLS handshake configuration.
//!
//! Roles, protocol versions, client-auth modes, the error taxonomy and the
//! per-part outcome of a reload.

/// Whether a configuration drives a TLS client or a TLS server.
pub mod config_role;

/// Supported protocol version identifiers (`TLS12`, `TLS13`).
pub mod tls_version;

/// Client certificate policy (`NONE` .. `REQUIREANDVERIFY`).
pub mod client_auth_mode;

/// Signature algorithm family of a loaded private key.
pub mod key_algorithm;

/// Where a piece of certificate material came from.
pub mod material_source;

/// The assembled rustls configuration for either role.
pub mod endpoint_config;

/// Result of reloading one part (certificate, client CAs, root CAs).
pub mod reload_outcome;

/// Build-time configuration errors.
pub mod config_error;

/// Certificate and private key loading errors.
pub mod certificate_load_error;

/// Trust pool construction errors.
pub mod trust_pool_error;

/// Reload-time errors.
pub mod reload_error;

/// Per-handshake peer verification errors.
pub mod verification_error;
