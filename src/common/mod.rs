//! Shared helpers: logging setup and log level parsing.

#[allow(clippy::module_inception)]
pub mod common;

pub mod tests;
