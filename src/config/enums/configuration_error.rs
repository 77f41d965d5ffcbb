use crate::tls::enums::config_error::ConfigError;

#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    InvalidLogLevel(String),
    Invalid(ConfigError),
    Created(String),
    Logging(log::SetLoggerError),
}
