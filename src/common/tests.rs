#[cfg(test)]
mod common_tests {
    use crate::common::common::parse_log_level;
    use crate::config::enums::configuration_error::ConfigurationError;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        match parse_log_level("INFO") {
            Err(ConfigurationError::InvalidLogLevel(level)) => assert_eq!(level, "INFO"),
            other => panic!("expected InvalidLogLevel, got {:?}", other),
        }
    }
}
