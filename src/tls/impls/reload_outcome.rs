use crate::tls::enums::reload_error::ReloadError;
use crate::tls::enums::reload_outcome::ReloadOutcome;
use log::{
    debug,
    error,
    info
};

impl ReloadOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, ReloadOutcome::Published(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReloadOutcome::Failed(_))
    }

    pub fn version(&self) -> Option<u64> {
        match self {
            ReloadOutcome::Published(version) => Some(*version),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ReloadError> {
        match self {
            ReloadOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub(crate) fn log(&self, part: &str) {
        match self {
            ReloadOutcome::Published(version) => {
                info!("[RELOAD] Published {} (version {})", part, version);
            }
            ReloadOutcome::Skipped => {
                debug!("[RELOAD] No source configured for {}, skipped", part);
            }
            ReloadOutcome::Failed(error) => {
                error!("[RELOAD] Error reloading {}: {}. Using current {}", part, error, part);
            }
        }
    }
}
