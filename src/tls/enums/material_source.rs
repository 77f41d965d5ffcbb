#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialSource {
    Files {
        cert: String,
        key: String,
    },
    Payload,
}
