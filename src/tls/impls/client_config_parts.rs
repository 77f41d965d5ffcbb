use crate::tls::structs::certificate_material::CertificateMaterial;
use crate::tls::structs::client_config_parts::ClientConfigParts;
use rustls::ClientConfig;
use rustls::client::Resumption;
use std::sync::Arc;

impl ClientConfigParts {
    /// Builds a client configuration, presenting `material` as the client
    /// certificate when given.
    pub fn assemble(&self, material: Option<&CertificateMaterial>) -> Result<ClientConfig, rustls::Error> {
        let builder = ClientConfig::builder_with_provider(Arc::clone(&self.provider))
            .with_protocol_versions(&self.versions)?
            .dangerous()
            .with_custom_certificate_verifier(Arc::clone(&self.server_verifier));
        let mut config = match material {
            Some(material) => builder.with_client_auth_cert(
                material.certificate_chain().to_vec(),
                material.private_key().clone_key(),
            )?,
            None => builder.with_no_client_auth(),
        };
        // A resumed session would skip verification against reloaded root CAs.
        config.resumption = Resumption::disabled();
        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfigParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfigParts")
            .field("versions", &self.versions)
            .field("server_verifier", &self.server_verifier)
            .finish_non_exhaustive()
    }
}
