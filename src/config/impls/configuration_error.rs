use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::InvalidLogLevel(level) => write!(f, "Unknown log level '{}'", level),
            ConfigurationError::Invalid(e) => e.fmt(f),
            ConfigurationError::Created(path) => write!(f, "Created {}, edit it and start again", path),
            ConfigurationError::Logging(e) => write!(f, "Failed to initialize logging: {}", e),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<crate::tls::enums::config_error::ConfigError> for ConfigurationError {
    fn from(error: crate::tls::enums::config_error::ConfigError) -> Self {
        ConfigurationError::Invalid(error)
    }
}
