use crate::tls::enums::config_role::ConfigRole;
use serde::{
    Deserialize,
    Serialize
};

/// Unset `min_version`/`max_version` fall back to `TLS12`/`TLS13`; an unset
/// `client_auth` means `NONE`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HandshakeOptions {
    pub role: ConfigRole,
    pub cert_required: bool,
    pub cert: String,
    pub key: String,
    pub key_passphrase: String,
    pub server_name: String,
    pub insecure: bool,
    pub root_ca_certs: String,
    pub use_system_root_ca_certs: bool,
    pub client_auth: String,
    pub client_ca_certs: String,
    pub use_system_client_ca_certs: bool,
    pub min_version: String,
    pub max_version: String,
}
