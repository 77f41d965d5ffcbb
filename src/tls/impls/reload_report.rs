use crate::tls::enums::reload_error::ReloadError;
use crate::tls::structs::reload_report::ReloadReport;

impl ReloadReport {
    /// True when no part failed. Skipped parts count as success.
    pub fn is_success(&self) -> bool {
        !self.certificate.is_failed() && !self.client_cas.is_failed() && !self.root_cas.is_failed()
    }

    pub fn errors(&self) -> Vec<(&'static str, &ReloadError)> {
        [
            ("certificate", &self.certificate),
            ("client CAs", &self.client_cas),
            ("root CAs", &self.root_cas),
        ]
        .into_iter()
        .filter_map(|(part, outcome)| outcome.error().map(|error| (part, error)))
        .collect()
    }
}
