#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::tls::enums::config_role::ConfigRole;
        use std::time::Duration;

        #[test]
        fn test_default_configuration_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.tls.role, ConfigRole::server);
            assert!(config.tls.cert_required);
            assert_eq!(config.reload.interval(), Some(Duration::from_secs(3600)));
        }

        #[test]
        fn test_minimal_file_uses_defaults() {
            let config = Configuration::load(b"log_level = \"debug\"\n").unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.reload.interval(), None);
            assert!(!config.tls.cert_required);
            assert_eq!(config.tls.min_version, "TLS12");
        }

        #[test]
        fn test_zero_interval_disables_reload() {
            let config = Configuration::load(b"log_level = \"info\"\n[reload]\ninterval_secs = 0\n").unwrap();
            assert_eq!(config.reload.interval(), None);
        }

        #[test]
        fn test_round_trip_through_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            Configuration::save_from_config(path, &Configuration::init()).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.tls, Configuration::init().tls);
            assert_eq!(loaded.reload, Configuration::init().reload);
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            match Configuration::load_from_file(path, true) {
                Err(ConfigurationError::Created(created)) => assert_eq!(created, path),
                other => panic!("expected Created, got {:?}", other),
            }
            assert!(Configuration::load_from_file(path, false).is_ok());
        }

        #[test]
        fn test_load_from_file_missing_without_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), false);
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_validate_rejects_bad_values() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::InvalidLogLevel(_))));

            let mut config = Configuration::init();
            config.tls.client_auth = String::from("MAYBE");
            assert!(matches!(config.validate(), Err(ConfigurationError::Invalid(_))));

            let mut config = Configuration::init();
            config.tls.min_version = String::from("TLS13");
            config.tls.max_version = String::from("TLS12");
            assert!(matches!(config.validate(), Err(ConfigurationError::Invalid(_))));
        }

        #[test]
        fn test_parse_error() {
            let result = Configuration::load(b"log_level = [");
            assert!(result.is_err());
        }
    }
}
