use crate::common::*;

#[doc = r#"
    Cloud object store (GCS JSON API) connection settings.

    Credentials are never part of this file: `access_token_env` names the
    environment variable holding the injected bearer token, so no build
    artifact ever carries a secret.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct RemoteObjectConfig {
    pub bucket: String,
    pub object_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_access_token_env")]
    pub access_token_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    String::from("https://storage.googleapis.com")
}

fn default_access_token_env() -> String {
    String::from("GCS_ACCESS_TOKEN")
}

fn default_timeout_secs() -> u64 {
    10
}
