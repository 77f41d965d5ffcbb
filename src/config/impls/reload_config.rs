use crate::config::structs::reload_config::ReloadConfig;
use std::time::Duration;

impl ReloadConfig {
    pub fn interval(&self) -> Option<Duration> {
        self.interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
