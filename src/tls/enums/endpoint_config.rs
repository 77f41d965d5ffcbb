use crate::tls::structs::client_config_parts::ClientConfigParts;
use crate::tls::structs::slot::Slot;
use std::sync::Arc;

pub enum EndpointConfig {
    /// Client configurations are immutable once handed to a connector, so a
    /// reloaded client certificate produces a fresh config published here.
    Client {
        current: Arc<Slot<rustls::ClientConfig>>,
        parts: ClientConfigParts,
    },
    Server(Arc<rustls::ServerConfig>),
}
