use crate::tls::enums::material_source::MaterialSource;

impl MaterialSource {
    pub(crate) fn origins(&self) -> (String, String) {
        match self {
            MaterialSource::Files { cert, key } => (cert.clone(), key.clone()),
            MaterialSource::Payload => ("payload cert".to_string(), "payload certKey".to_string()),
        }
    }
}

impl std::fmt::Display for MaterialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialSource::Files { cert, key } => write!(f, "{} / {}", cert, key),
            MaterialSource::Payload => write!(f, "reload payload"),
        }
    }
}
