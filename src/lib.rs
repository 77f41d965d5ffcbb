//! # tls-hotswap
//!
//! Hot-reloadable TLS configuration for rustls clients and servers.
//!
//! ## Overview
//!
//! A [`tls::structs::handshake_config::HandshakeConfig`] is built once from
//! declarative [`tls::structs::handshake_options::HandshakeOptions`]. The
//! certificate, the client CA pool and the root CA pool it uses can then be
//! replaced at any time through a
//! [`tls::structs::reload_coordinator::ReloadCoordinator`], without rebuilding
//! listeners or connectors.
//!
//! ## Features
//!
//! - **Certificate swap**: new handshakes pick up reloaded certificates immediately
//! - **Client auth policy**: `NONE`, `REQUEST`, `REQUIREANY`, `VERIFYIFGIVEN`, `REQUIREANDVERIFY`
//! - **CA rotation**: client and root CA bundles reload like certificates
//! - **Encrypted keys**: PKCS#8 private keys protected by a passphrase
//! - **Pushed payloads**: install a certificate from a JSON document
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tls_hotswap::tls::structs::handshake_config::HandshakeConfig;
//! use tls_hotswap::tls::structs::handshake_options::HandshakeOptions;
//!
//! let (config, coordinator) = HandshakeConfig::build(HandshakeOptions::server("cert.pem", "key.pem"))?;
//! let acceptor_config = config.server_config();
//!
//! // later, after the files were rotated on disk
//! let report = coordinator.reload_from_files();
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration file management and TOML parsing
//! - [`structs`] - CLI argument parsing
//! - [`tls`] - Handshake configuration, slots, verifiers and reloading

/// Common utilities and shared functionality.
///
/// Contains the fern based logging setup used by the daemon.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration file.
pub mod config;

/// Command-line interface structures.
pub mod structs;

/// Hot-reloadable TLS configuration.
///
/// Builds rustls configurations whose certificate and CA pools can be swapped
/// at runtime, and the coordinator that performs the swaps.
pub mod tls;
