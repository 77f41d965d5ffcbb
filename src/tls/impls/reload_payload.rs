use crate::tls::structs::reload_payload::ReloadPayload;

impl std::fmt::Debug for ReloadPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadPayload")
            .field("cert", &format!("{} bytes", self.cert.len()))
            .field("cert_key", &"<redacted>")
            .field("cert_key_pass_phrase", &if self.cert_key_pass_phrase.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}
