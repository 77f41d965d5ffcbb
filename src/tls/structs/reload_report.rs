use crate::tls::enums::reload_outcome::ReloadOutcome;

#[derive(Debug)]
pub struct ReloadReport {
    pub certificate: ReloadOutcome,
    pub client_cas: ReloadOutcome,
    pub root_cas: ReloadOutcome,
}
