use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use fern::colors::{
    Color,
    ColoredLevelConfig
};
use log::info;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, ConfigurationError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(ConfigurationError::InvalidLogLevel(level.to_string())),
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError> {
    let level = parse_log_level(&config.log_level)?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(ConfigurationError::Logging)?;

    info!("logging initialized.");
    Ok(())
}
