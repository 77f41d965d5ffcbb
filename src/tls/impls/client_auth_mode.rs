use crate::tls::enums::client_auth_mode::ClientAuthMode;
use crate::tls::enums::config_error::ConfigError;
use std::str::FromStr;

impl ClientAuthMode {
    pub const ALL: [ClientAuthMode; 5] = [
        ClientAuthMode::None,
        ClientAuthMode::Request,
        ClientAuthMode::RequireAny,
        ClientAuthMode::VerifyIfGiven,
        ClientAuthMode::RequireAndVerify,
    ];

    /// An empty string selects `None`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        if value.trim().is_empty() {
            return Ok(ClientAuthMode::None);
        }
        value.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientAuthMode::None => "NONE",
            ClientAuthMode::Request => "REQUEST",
            ClientAuthMode::RequireAny => "REQUIREANY",
            ClientAuthMode::VerifyIfGiven => "VERIFYIFGIVEN",
            ClientAuthMode::RequireAndVerify => "REQUIREANDVERIFY",
        }
    }

    pub fn requires_ca_verification(&self) -> bool {
        matches!(self, ClientAuthMode::VerifyIfGiven | ClientAuthMode::RequireAndVerify)
    }

    /// The equivalent mode without any CA check, which is what the handshake
    /// layer itself enforces.
    pub fn presence_only(&self) -> ClientAuthMode {
        match self {
            ClientAuthMode::VerifyIfGiven => ClientAuthMode::Request,
            ClientAuthMode::RequireAndVerify => ClientAuthMode::RequireAny,
            other => *other,
        }
    }

    pub fn offers_client_auth(&self) -> bool {
        !matches!(self, ClientAuthMode::None)
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, ClientAuthMode::RequireAny | ClientAuthMode::RequireAndVerify)
    }
}

impl FromStr for ClientAuthMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_uppercase();
        ClientAuthMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ConfigError::InvalidAuthMode(format!(
                "'{}'. Valid values [NONE, REQUEST, REQUIREANY, VERIFYIFGIVEN, REQUIREANDVERIFY]",
                value
            )))
    }
}

impl std::fmt::Display for ClientAuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
