use crate::common::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub dashboard_title: String,
}
