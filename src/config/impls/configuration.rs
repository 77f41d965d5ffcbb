use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::reload_config::ReloadConfig;
use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::structs::handshake_options::HandshakeOptions;
use crate::tls::structs::version_range::VersionRange;
use std::fs::File;
use std::io::Write;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            reload: ReloadConfig {
                interval_secs: Some(3600),
            },
            tls: HandshakeOptions::server("cert.pem", "key.pem"),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, data)
    }

    /// Loads and validates `path`. When the file is missing or broken and
    /// `create` is set, a default file is written and `Created` returned so
    /// the caller can exit and let the operator edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");
                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(ConfigurationError::Created(path.to_string()))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    /// Checks every value that can be checked without touching the
    /// certificate and CA sources.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(&self.log_level)?;
        VersionRange::parse(&self.tls.min_version, &self.tls.max_version)?;
        ClientAuthMode::parse(&self.tls.client_auth)?;
        Ok(())
    }
}
