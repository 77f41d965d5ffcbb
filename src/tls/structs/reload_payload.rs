use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct ReloadPayload {
    pub cert: String,
    #[serde(rename = "certKey")]
    pub cert_key: String,
    #[serde(rename = "certKeyPassPhrase", default)]
    pub cert_key_pass_phrase: String,
}
