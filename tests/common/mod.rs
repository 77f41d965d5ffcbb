#![allow(dead_code)]
use rcgen::{
    BasicConstraints,
    CertificateParams,
    DnType,
    ExtendedKeyUsagePurpose,
    IsCa,
    KeyPair,
    KeyUsagePurpose
};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer,
    PrivatePkcs8KeyDer,
    ServerName,
    UnixTime
};
use rustls::server::WebPkiClientVerifier;
use rustls::{
    ClientConfig,
    ClientConnection,
    RootCertStore,
    ServerConfig,
    ServerConnection,
    SupportedProtocolVersion
};
use std::sync::Arc;
use std::sync::atomic::{
    AtomicUsize,
    Ordering
};
use tempfile::TempDir;
use tls_hotswap::tls::enums::verification_error::VerificationError;
use tls_hotswap::tls::structs::trust_pool::TrustPool;
use tls_hotswap::tls::traits::peer_verifier::PeerVerifier;

pub const SERVER_NAME: &str = "localhost";

pub struct TestCa {
    pub cert: rcgen::Certificate,
    pub key: KeyPair,
}

pub struct TestLeaf {
    pub cert_pem: String,
    pub key_pem: String,
    pub cert_der: Vec<u8>,
    pub key_der: Vec<u8>,
}

impl TestCa {
    pub fn pem(&self) -> String {
        self.cert.pem()
    }

    pub fn der(&self) -> CertificateDer<'static> {
        self.cert.der().clone()
    }
}

impl TestLeaf {
    pub fn certificate(&self) -> CertificateDer<'static> {
        CertificateDer::from(self.cert_der.clone())
    }

    pub fn private_key(&self) -> PrivateKeyDer<'static> {
        PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(self.key_der.clone()))
    }

    /// Leaf followed by its issuer, as a server would send it.
    pub fn chain_pem(&self, ca: &TestCa) -> String {
        format!("{}{}", self.cert_pem, ca.pem())
    }
}

pub fn provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

pub fn create_ca(name: &str) -> TestCa {
    let mut params = CertificateParams::new(Vec::<String>::new()).expect("CA params");
    params.distinguished_name.push(DnType::CommonName, name);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![
        KeyUsagePurpose::KeyCertSign,
        KeyUsagePurpose::CrlSign,
        KeyUsagePurpose::DigitalSignature,
    ];
    let key = KeyPair::generate().expect("CA key");
    let cert = params.self_signed(&key).expect("CA certificate");
    TestCa { cert, key }
}

pub fn create_intermediate(root: &TestCa, name: &str) -> TestCa {
    let mut params = CertificateParams::new(Vec::<String>::new()).expect("intermediate params");
    params.distinguished_name.push(DnType::CommonName, name);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![
        KeyUsagePurpose::KeyCertSign,
        KeyUsagePurpose::CrlSign,
        KeyUsagePurpose::DigitalSignature,
    ];
    let key = KeyPair::generate().expect("intermediate key");
    let cert = params.signed_by(&key, &root.cert, &root.key).expect("intermediate certificate");
    TestCa { cert, key }
}

pub fn issue_leaf(ca: &TestCa, name: &str) -> TestLeaf {
    let mut params = CertificateParams::new(vec![name.to_string()]).expect("leaf params");
    params.distinguished_name.push(DnType::CommonName, name);
    params.key_usages = vec![KeyUsagePurpose::DigitalSignature];
    params.extended_key_usages = vec![
        ExtendedKeyUsagePurpose::ServerAuth,
        ExtendedKeyUsagePurpose::ClientAuth,
    ];
    let key = KeyPair::generate().expect("leaf key");
    let cert = params.signed_by(&key, &ca.cert, &ca.key).expect("leaf certificate");
    TestLeaf {
        cert_pem: cert.pem(),
        key_pem: key.serialize_pem(),
        cert_der: cert.der().to_vec(),
        key_der: key.serialize_der(),
    }
}

/// PBKDF2 keeps the tests fast compared to the scrypt default.
pub fn encrypt_key(leaf: &TestLeaf, passphrase: &str) -> String {
    use pkcs8::der::pem::LineEnding;

    let info = pkcs8::PrivateKeyInfo::try_from(leaf.key_der.as_slice()).expect("PKCS#8 key");
    let salt = [7u8; 16];
    let iv = [9u8; 16];
    let params = pkcs8::pkcs5::pbes2::Parameters::pbkdf2_sha256_aes256cbc(2048, &salt, &iv)
        .expect("PBES2 parameters");
    let encrypted = info
        .encrypt_with_params(params, passphrase)
        .expect("key encryption");
    let pem = encrypted
        .to_pem("ENCRYPTED PRIVATE KEY", LineEnding::LF)
        .expect("PEM encoding");
    pem.as_str().to_string()
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path.to_str().expect("UTF-8 path").to_string()
}

/// Writes `leaf` (with its issuer) to `cert.pem`/`key.pem` in `dir`.
pub fn write_identity(dir: &TempDir, ca: &TestCa, leaf: &TestLeaf) -> (String, String) {
    (
        write_file(dir, "cert.pem", &leaf.chain_pem(ca)),
        write_file(dir, "key.pem", &leaf.key_pem),
    )
}

pub fn fingerprint(leaf: &TestLeaf) -> String {
    use sha2::Digest;
    hex::encode(sha2::Sha256::digest(&leaf.cert_der))
}

pub fn reload_payload(ca: &TestCa, leaf: &TestLeaf, key_pem: &str, passphrase: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "cert": leaf.chain_pem(ca),
        "certKey": key_pem,
        "certKeyPassPhrase": passphrase,
    }))
    .expect("payload")
}

/// A stock rustls client trusting `ca`, presenting `identity` when given.
pub fn plain_client_config(
    ca: &TestCa,
    identity: Option<&TestLeaf>,
    versions: &[&'static SupportedProtocolVersion],
) -> Arc<ClientConfig> {
    let mut roots = RootCertStore::empty();
    roots.add(ca.der()).expect("root certificate");
    let builder = ClientConfig::builder_with_provider(provider())
        .with_protocol_versions(versions)
        .expect("protocol versions")
        .with_root_certificates(roots);
    let config = match identity {
        Some(leaf) => builder
            .with_client_auth_cert(vec![leaf.certificate()], leaf.private_key())
            .expect("client certificate"),
        None => builder.with_no_client_auth(),
    };
    Arc::new(config)
}

/// A stock rustls server presenting `leaf`, requiring clients signed by
/// `client_ca` when given.
pub fn plain_server_config(leaf: &TestLeaf, client_ca: Option<&TestCa>) -> Arc<ServerConfig> {
    let builder = ServerConfig::builder_with_provider(provider())
        .with_safe_default_protocol_versions()
        .expect("protocol versions");
    let builder = match client_ca {
        Some(ca) => {
            let mut roots = RootCertStore::empty();
            roots.add(ca.der()).expect("client CA");
            let verifier = WebPkiClientVerifier::builder_with_provider(Arc::new(roots), provider())
                .build()
                .expect("client verifier");
            builder.with_client_cert_verifier(verifier)
        }
        None => builder.with_no_client_auth(),
    };
    Arc::new(
        builder
            .with_single_cert(vec![leaf.certificate()], leaf.private_key())
            .expect("server certificate"),
    )
}

fn io_error(error: std::io::Error) -> rustls::Error {
    rustls::Error::General(error.to_string())
}

fn client_to_server(client: &mut ClientConnection, server: &mut ServerConnection) -> Result<(), rustls::Error> {
    let mut buffer = Vec::new();
    while client.wants_write() {
        client.write_tls(&mut buffer).map_err(io_error)?;
    }
    let mut reader = buffer.as_slice();
    while !reader.is_empty() {
        server.read_tls(&mut reader).map_err(io_error)?;
        server.process_new_packets()?;
    }
    Ok(())
}

fn server_to_client(server: &mut ServerConnection, client: &mut ClientConnection) -> Result<(), rustls::Error> {
    let mut buffer = Vec::new();
    while server.wants_write() {
        server.write_tls(&mut buffer).map_err(io_error)?;
    }
    let mut reader = buffer.as_slice();
    while !reader.is_empty() {
        client.read_tls(&mut reader).map_err(io_error)?;
        client.process_new_packets()?;
    }
    Ok(())
}

/// Runs a full handshake in memory. Any error raised by either side is
/// returned.
pub fn handshake(
    client_config: Arc<ClientConfig>,
    server_config: Arc<ServerConfig>,
) -> Result<(ClientConnection, ServerConnection), rustls::Error> {
    let name = ServerName::try_from(SERVER_NAME.to_string()).expect("server name");
    let mut client = ClientConnection::new(client_config, name)?;
    let mut server = ServerConnection::new(server_config)?;

    for _ in 0..16 {
        client_to_server(&mut client, &mut server)?;
        server_to_client(&mut server, &mut client)?;
        if !client.is_handshaking() && !server.is_handshaking() {
            // Flush the client's final flight so the server sees any late rejection.
            client_to_server(&mut client, &mut server)?;
            return Ok((client, server));
        }
    }
    Err(rustls::Error::General(String::from("handshake did not complete")))
}

/// Leaf certificate the server presented to the client.
pub fn presented_leaf(client: &ClientConnection) -> Option<Vec<u8>> {
    client
        .peer_certificates()
        .and_then(|chain| chain.first())
        .map(|leaf| leaf.to_vec())
}

/// Test double counting calls and returning a fixed decision.
#[derive(Debug)]
pub struct RecordingPeerVerifier {
    pub calls: AtomicUsize,
    pub decision: Result<(), VerificationError>,
}

impl RecordingPeerVerifier {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            decision: Ok(()),
        })
    }

    pub fn rejecting(error: VerificationError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            decision: Err(error),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PeerVerifier for RecordingPeerVerifier {
    fn verify(
        &self,
        _chain: &[CertificateDer<'_>],
        _trust_pool: &TrustPool,
        _now: UnixTime,
    ) -> Result<(), VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.decision.clone()
    }
}
