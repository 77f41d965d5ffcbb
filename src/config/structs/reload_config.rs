use serde::{
    Deserialize,
    Serialize
};

/// An unset or zero interval disables periodic reloads; `SIGHUP` still works.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadConfig {
    pub interval_secs: Option<u64>,
}
