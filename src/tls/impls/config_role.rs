use crate::tls::enums::config_role::ConfigRole;

impl ConfigRole {
    pub fn is_client(&self) -> bool {
        matches!(self, ConfigRole::client)
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ConfigRole::server)
    }
}

impl std::fmt::Display for ConfigRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigRole::client => write!(f, "client"),
            ConfigRole::server => write!(f, "server"),
        }
    }
}
