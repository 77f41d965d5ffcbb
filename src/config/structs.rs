//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// `[reload]` section: periodic reload of the TLS material.
pub mod reload_config;
