//! Hot-reloadable TLS configuration.
//!
//! Builds rustls client and server configurations whose certificate, client
//! CA pool and root CA pool can be replaced while listeners and connectors
//! keep running.
//!
//! # Slots
//!
//! Every replaceable piece lives in a [`structs::slot::Slot`]. Handshakes take
//! one snapshot per lookup and never block; reloads publish a fresh immutable
//! value. A handshake that already took its snapshot finishes with it.
//!
//! # Client authentication
//!
//! `VERIFYIFGIVEN` and `REQUIREANDVERIFY` are enforced by rustls only as
//! `REQUEST` and `REQUIREANY`. The CA check runs through an injected
//! [`traits::peer_verifier::PeerVerifier`] against the current client CA
//! snapshot, so a reloaded CA bundle takes effect on the next handshake.
//!
//! # Reloading
//!
//! [`structs::reload_coordinator::ReloadCoordinator`] re-reads the configured
//! sources (on a timer, on `SIGHUP`, or when asked) or installs a pushed JSON
//! payload. Failures keep the current material and are logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use tls_hotswap::tls::structs::handshake_config::HandshakeConfig;
//! use tls_hotswap::tls::structs::handshake_options::HandshakeOptions;
//!
//! let (config, coordinator) = HandshakeConfig::build(HandshakeOptions::server("cert.pem", "key.pem"))?;
//! let server_config = config.server_config();
//! coordinator.spawn_interval(std::time::Duration::from_secs(3600));
//! ```

/// TLS enumerations (roles, versions, client auth modes, errors).
pub mod enums;

/// TLS data structures.
pub mod structs;

/// Implementation blocks for the TLS data structures.
pub mod impls;

/// Type aliases for the TLS module.
pub mod types;

/// Injectable verification traits.
pub mod traits;

#[allow(clippy::module_inception)]
pub mod tls;
