use crate::tls::enums::reload_error::ReloadError;

#[derive(Debug)]
pub enum ReloadOutcome {
    Published(u64),
    Skipped,
    Failed(ReloadError),
}
