//! Configuration management module.
//!
//! Loads the TOML configuration file that drives the daemon: the log level,
//! the periodic reload interval and the `[tls]` handshake options.
//!
//! # Example
//!
//! ```toml
//! log_level = "info"
//!
//! [reload]
//! interval_secs = 3600
//!
//! [tls]
//! role = "server"
//! cert_required = true
//! cert = "cert.pem"
//! key = "key.pem"
//! client_auth = "REQUIREANDVERIFY"
//! client_ca_certs = "clients-ca.pem"
//! min_version = "TLS12"
//! max_version = "TLS13"
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

pub mod tests;
