use crate::tls::enums::config_role::ConfigRole;
use crate::tls::structs::handshake_options::HandshakeOptions;

pub const DEFAULT_MIN_VERSION: &str = "TLS12";
pub const DEFAULT_MAX_VERSION: &str = "TLS13";

impl Default for HandshakeOptions {
    fn default() -> Self {
        Self {
            role: ConfigRole::server,
            cert_required: false,
            cert: String::new(),
            key: String::new(),
            key_passphrase: String::new(),
            server_name: String::new(),
            insecure: false,
            root_ca_certs: String::new(),
            use_system_root_ca_certs: false,
            client_auth: String::new(),
            client_ca_certs: String::new(),
            use_system_client_ca_certs: false,
            min_version: String::from(DEFAULT_MIN_VERSION),
            max_version: String::from(DEFAULT_MAX_VERSION),
        }
    }
}

impl std::fmt::Debug for HandshakeOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandshakeOptions")
            .field("role", &self.role)
            .field("cert_required", &self.cert_required)
            .field("cert", &crate::tls::tls::source_label(&self.cert))
            .field("key", &crate::tls::tls::source_label(&self.key))
            .field("key_passphrase", &if self.key_passphrase.is_empty() { "" } else { "<redacted>" })
            .field("server_name", &self.server_name)
            .field("insecure", &self.insecure)
            .field("root_ca_certs", &crate::tls::tls::source_label(&self.root_ca_certs))
            .field("use_system_root_ca_certs", &self.use_system_root_ca_certs)
            .field("client_auth", &self.client_auth)
            .field("client_ca_certs", &crate::tls::tls::source_label(&self.client_ca_certs))
            .field("use_system_client_ca_certs", &self.use_system_client_ca_certs)
            .field("min_version", &self.min_version)
            .field("max_version", &self.max_version)
            .finish()
    }
}

impl HandshakeOptions {
    pub fn server(cert: &str, key: &str) -> Self {
        Self {
            role: ConfigRole::server,
            cert_required: true,
            cert: cert.to_string(),
            key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn client() -> Self {
        Self {
            role: ConfigRole::client,
            ..Default::default()
        }
    }

    /// CA source for verifying client certificates, if any is configured.
    pub fn client_ca_source(&self) -> Option<(&str, bool)> {
        if !self.client_ca_certs.trim().is_empty() || self.use_system_client_ca_certs {
            return Some((self.client_ca_certs.as_str(), self.use_system_client_ca_certs));
        }
        None
    }

    /// CA source for verifying the remote server. A verifying client with
    /// nothing configured falls back to the system trust store.
    pub fn root_ca_source(&self) -> Option<(&str, bool)> {
        if !self.root_ca_certs.trim().is_empty() || self.use_system_root_ca_certs {
            return Some((self.root_ca_certs.as_str(), self.use_system_root_ca_certs));
        }
        if self.role.is_client() && !self.insecure {
            return Some(("", true));
        }
        None
    }
}
