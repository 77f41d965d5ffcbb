use crate::config::structs::reload_config::ReloadConfig;
use crate::tls::structs::handshake_options::HandshakeOptions;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub reload: ReloadConfig,
    #[serde(default)]
    pub tls: HandshakeOptions,
}
