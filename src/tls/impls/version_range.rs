use crate::tls::enums::config_error::ConfigError;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::impls::handshake_options::{
    DEFAULT_MAX_VERSION,
    DEFAULT_MIN_VERSION
};
use crate::tls::structs::version_range::VersionRange;
use rustls::SupportedProtocolVersion;

impl Default for VersionRange {
    fn default() -> Self {
        Self {
            min: TlsVersion::Tls12,
            max: TlsVersion::Tls13,
        }
    }
}

impl VersionRange {
    pub fn new(min: TlsVersion, max: TlsVersion) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidVersion(format!(
                "cannot use '{}' as max_version, it's lower than '{}'",
                max, min
            )));
        }
        Ok(Self { min, max })
    }

    /// Empty strings select the documented defaults.
    pub fn parse(min: &str, max: &str) -> Result<Self, ConfigError> {
        let min_value = if min.trim().is_empty() { DEFAULT_MIN_VERSION } else { min };
        let max_value = if max.trim().is_empty() { DEFAULT_MAX_VERSION } else { max };
        let min = min_value.parse::<TlsVersion>().map_err(|_| ConfigError::InvalidVersion(format!(
            "min_version '{}'. Valid values [TLS12, TLS13]",
            min_value
        )))?;
        let max = max_value.parse::<TlsVersion>().map_err(|_| ConfigError::InvalidVersion(format!(
            "max_version '{}'. Valid values [TLS12, TLS13]",
            max_value
        )))?;
        Self::new(min, max)
    }

    pub fn min(&self) -> TlsVersion {
        self.min
    }

    pub fn max(&self) -> TlsVersion {
        self.max
    }

    pub fn contains(&self, version: TlsVersion) -> bool {
        self.min <= version && version <= self.max
    }

    pub fn protocol_versions(&self) -> Vec<&'static SupportedProtocolVersion> {
        TlsVersion::ALL
            .into_iter()
            .filter(|version| self.contains(*version))
            .map(|version| version.protocol_version())
            .collect()
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
